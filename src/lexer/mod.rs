//! Lexical analysis.
//!
//! Converts raw source text into a flat [`token::Token`] stream while filling
//! the symbol table online:
//! - [`cursor`]: character cursor with line/column tracking
//! - [`tables`]: fixed keyword/operator/punctuation membership sets
//! - [`token`]: token records, categories and constant value tags
//! - [`scanner`]: the scan loop, first-pass classification and diagnostics
//!
//! [`scan`] is the one-call entry point: it runs the scanner over the whole
//! input and then applies the refinement pass from [`crate::symbols::refine`]
//! to the finished token list.

pub mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

use scanner::{ScanOutput, Scanner};

/// Scan `input` end to end: tokenize, classify identifiers online, then
/// refine the symbol table against the completed token list.
///
/// Never fails; malformed literals are reported through
/// [`ScanOutput::diagnostics`].
pub fn scan(input: &str) -> ScanOutput {
    let mut output = Scanner::new(input).run();
    crate::symbols::refine::refine(&output.tokens, &mut output.symbols);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::table::SymbolKind;

    #[test]
    fn test_scan_applies_refinement() {
        // the first pass alone guesses "field" here; the refinement pass
        // corrects it because no modifier precedes the declaration
        let output = scan("int x = 5;");
        assert_eq!(output.symbols.get("x").unwrap().kind, SymbolKind::Local);

        let first_pass = Scanner::new("int x = 5;").run();
        assert_eq!(
            first_pass.symbols.get("x").unwrap().kind,
            SymbolKind::Field
        );
    }
}
