use tokava::lexer;
use tokava::lexer::scanner::ScanOutput;
use tokava::lexer::token::{TokenCategory, ValueType};

fn lexemes(output: &ScanOutput) -> Vec<&str> {
    output.tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn test_simple_declaration_stream() {
    let output = lexer::scan("int x = 5;");

    assert_eq!(lexemes(&output), vec!["int", "x", "=", "5", ";"]);
    let categories: Vec<_> = output.tokens.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::Keyword,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Constant,
            TokenCategory::Punctuation,
        ]
    );
    assert_eq!(output.tokens[3].value_type, Some(ValueType::Int));
    assert_eq!(output.tokens[0].value_type, None);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_token_positions_across_lines() {
    let output = lexer::scan("int a;\n  double b;\n");

    let positions: Vec<_> = output
        .tokens
        .iter()
        .map(|t| (t.location.line, t.location.column))
        .collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 5), (1, 6), (2, 3), (2, 10), (2, 11)]
    );
}

#[test]
fn test_comments_are_skipped() {
    let output = lexer::scan("int x; // trailing note\nint y; /* spans\ntwo lines */ int z;");

    assert_eq!(
        lexemes(&output),
        vec!["int", "x", ";", "int", "y", ";", "int", "z", ";"]
    );
    // the token after the block comment sits on the third line
    let z = &output.tokens[7];
    assert_eq!((z.location.line, z.location.column), (3, 18));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_unterminated_block_comment() {
    let output = lexer::scan("/* never closed");

    assert!(output.tokens.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!((diagnostic.location.line, diagnostic.location.column), (1, 1));
    assert!(diagnostic.message.contains("block comment"));
}

#[test]
fn test_string_literal_keeps_escapes_verbatim() {
    let output = lexer::scan("String s = \"a\\\"b\";");

    let constant = &output.tokens[3];
    assert_eq!(constant.category, TokenCategory::Constant);
    assert_eq!(constant.lexeme, "\"a\\\"b\"");
    assert_eq!(constant.value_type, Some(ValueType::Str));
    assert_eq!(constant.location.column, 12);
    assert_eq!(output.tokens[4].lexeme, ";");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_string_closed_by_newline() {
    let output = lexer::scan("\"abc\nint x;");

    assert_eq!(output.tokens[0].lexeme, "\"abc\"");
    assert_eq!(output.tokens[0].value_type, Some(ValueType::Str));
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("string"));
    // scanning continues on the next line
    assert_eq!(lexemes(&output), vec!["\"abc\"", "int", "x", ";"]);
    assert_eq!(output.tokens[1].location.line, 2);
}

#[test]
fn test_numeral_with_second_dot() {
    let output = lexer::scan("3.14.5");

    assert_eq!(lexemes(&output), vec!["3.14", ".", "5"]);
    assert_eq!(output.tokens[0].value_type, Some(ValueType::Double));
    assert_eq!(output.tokens[1].category, TokenCategory::Operator);
    assert_eq!(output.tokens[2].value_type, Some(ValueType::Int));
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("3.14"));
    // the second dot is left for the next branch
    assert_eq!(output.tokens[1].location.column, 5);
}

#[test]
fn test_compound_operators() {
    let output = lexer::scan("== <= >= != ++ -- += -= *= /= && ||");

    assert_eq!(
        lexemes(&output),
        vec!["==", "<=", ">=", "!=", "++", "--", "+=", "-=", "*=", "/=", "&&", "||"]
    );
    assert!(output
        .tokens
        .iter()
        .all(|t| t.category == TokenCategory::Operator));
}

#[test]
fn test_dot_and_colon_are_operators() {
    let output = lexer::scan("a.b:c");

    let categories: Vec<_> = output.tokens.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Identifier,
        ]
    );
}

#[test]
fn test_unrecognized_characters_fall_back_to_punctuation() {
    let output = lexer::scan("@ # ^");

    assert_eq!(lexemes(&output), vec!["@", "#", "^"]);
    assert!(output
        .tokens
        .iter()
        .all(|t| t.category == TokenCategory::Punctuation));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_round_trip_reconstruction() {
    let source = "public class Brew {\n    // fields\n    private int count = 2;\n    String label = \"mix #1\";\n    /* done */\n}\n";
    let output = lexer::scan(source);
    let chars: Vec<char> = source.chars().collect();

    let mut line_offsets = vec![0usize];
    for (i, c) in chars.iter().enumerate() {
        if *c == '\n' {
            line_offsets.push(i + 1);
        }
    }

    let mut rebuilt = String::new();
    let mut consumed = 0usize;
    for token in &output.tokens {
        let start = line_offsets[token.location.line - 1] + token.location.column - 1;
        assert!(start >= consumed, "token {:?} overlaps its predecessor", token);

        let len = token.lexeme.chars().count();
        let at_source: String = chars[start..start + len].iter().collect();
        assert_eq!(at_source, token.lexeme);

        rebuilt.extend(chars[consumed..start].iter());
        rebuilt.push_str(&token.lexeme);
        consumed = start + len;
    }
    rebuilt.extend(chars[consumed..].iter());

    assert_eq!(rebuilt, source);
}

#[test]
fn test_identifier_charset() {
    let output = lexer::scan("_x $y zähler x2");

    assert_eq!(lexemes(&output), vec!["_x", "$y", "zähler", "x2"]);
    assert!(output
        .tokens
        .iter()
        .all(|t| t.category == TokenCategory::Identifier));
}

#[test]
fn test_keyword_must_match_whole_lexeme() {
    let output = lexer::scan("class classify");

    assert_eq!(output.tokens[0].category, TokenCategory::Keyword);
    assert_eq!(output.tokens[1].category, TokenCategory::Identifier);
    assert_eq!(output.tokens[1].lexeme, "classify");
}
