// tokava: heuristic Java tokenizer with positional symbol classification

mod lexer;
mod report;
mod symbols;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Scanned when no input file is given on the command line.
const SAMPLE_SOURCE: &str = r#"public class TeaBlender {
    // Leaf prices in cents per gram
    private static final double LEAF_PRICE = 4.25;
    private static final int TIN_CAPACITY = 250;
    private String blenderName;
    private double gramsOnHand;
    private int tinsFilled;

    public TeaBlender(String name, double startingGrams) {
        this.blenderName = name;
        this.gramsOnHand = startingGrams;
        this.tinsFilled = 0;
    }

    /* Fills one tin if enough leaf remains */
    public void fillTin(int greenGrams, int blackGrams) {
        double blend = greenGrams + blackGrams * 1.5;
        if (blend <= this.gramsOnHand) {
            this.gramsOnHand -= blend;
            this.tinsFilled++;
            System.out.println("Filled tin #" + this.tinsFilled);
        } else {
            System.out.println("Short by " + (blend - this.gramsOnHand) + " grams.\n");
        }
    }
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let source = if args.len() >= 2 {
        let input_file = &args[1];

        if !Path::new(input_file).exists() {
            eprintln!("Error: File '{}' not found", input_file);
            eprintln!(
                "Usage: {} [file.java]",
                args.get(0).map(|s| s.as_str()).unwrap_or("tokava")
            );
            std::process::exit(1);
        }

        // Read source code
        eprintln!("Scanning {}...", input_file);
        fs::read_to_string(input_file)?
    } else {
        eprintln!("No input file given; scanning the embedded sample.");
        SAMPLE_SOURCE.to_string()
    };

    // Scan and classify
    let output = lexer::scan(&source);

    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }
    eprintln!(
        "Scanned {} tokens, {} distinct identifiers.",
        output.tokens.len(),
        output.symbols.len()
    );

    // Print the listings; colors only when stdout is a terminal
    let colored = io::stdout().is_terminal();
    print!("{}", report::render_tokens(&output.tokens, colored));
    print!("{}", report::render_symbols(&output.symbols, colored));

    Ok(())
}
