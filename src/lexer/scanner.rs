//! First-pass scanner: source characters to tokens plus heuristic symbol roles.
//!
//! The scan loop inspects one character of lookahead and dispatches to exactly
//! one branch per step; every branch consumes its whole lexeme. Recognition
//! order: whitespace, comments, string literals, numeric literals,
//! identifiers/keywords, two-character operators, punctuation, single
//! operators, then a permissive one-character fallback for anything else.
//!
//! Scanning never fails. Malformed literals (unterminated block comments,
//! strings cut off by a newline, numerals with a second decimal point) surface
//! as advisory [`Diagnostic`] records in the returned [`ScanOutput`] while the
//! best-effort token is still emitted.

use std::fmt;

use super::cursor::{Cursor, SourceLocation};
use super::tables::Tables;
use super::token::{Token, TokenCategory, ValueType};
use crate::symbols::table::{SymbolInfo, SymbolKind, SymbolTable};

/// Advisory record for a malformed literal. Never a failure; the scan
/// continues past every one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: SourceLocation,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "warning at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

/// Everything one scan produces: the token sequence, the symbol table after
/// classification, and any advisory diagnostics in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Context flags threaded through the scan loop to drive first-pass
/// classification.
#[derive(Debug, Default)]
struct ScanState {
    /// Most recent type keyword, waiting for the identifier it declares.
    pending_declared_type: Option<String>,
    /// Flat flag toggled by `(` and `)`; any closing paren clears it, so
    /// nested parentheses restore it wrongly. Inherited limitation.
    inside_parameter_list: bool,
    /// True only for the single token following `class`.
    just_saw_class_keyword: bool,
    /// Last identifier classified as a class name.
    #[allow(dead_code)] // informational, read in tests only
    current_class_name: Option<String>,
}

impl ScanState {
    /// Called at the end of every branch that neither sets nor consumes the
    /// declaration flags. Whitespace and comments leave the state untouched.
    fn clear_declaration_context(&mut self) {
        self.pending_declared_type = None;
        self.just_saw_class_keyword = false;
    }
}

/// The scan loop. One instance owns its cursor, token list, symbol table and
/// diagnostics for the duration of one run.
pub struct Scanner {
    cursor: Cursor,
    tables: Tables,
    state: ScanState,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            tables: Tables::new(),
            state: ScanState::default(),
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Consume the whole input and return the first-pass results.
    ///
    /// The symbol table holds only the online heuristics at this point; the
    /// refinement pass is applied on top by [`scan`](super::scan).
    pub fn run(mut self) -> ScanOutput {
        while !self.cursor.is_at_end() {
            self.scan_token();
        }
        ScanOutput {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        }
    }

    /// Consume exactly one lexeme (or one run of trivia).
    fn scan_token(&mut self) {
        let first = match self.cursor.peek() {
            Some(c) => c,
            None => return,
        };
        let location = self.cursor.location();

        if matches!(first, ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
            return;
        }

        if first == '/' {
            match self.cursor.peek_ahead(1) {
                Some('/') => {
                    self.skip_line_comment();
                    return;
                }
                Some('*') => {
                    self.skip_block_comment(location);
                    return;
                }
                // plain '/' falls through to the operator branches
                _ => {}
            }
        }

        if first == '"' {
            self.scan_string(location);
        } else if first.is_ascii_digit() {
            self.scan_number(location);
        } else if is_identifier_start(first) {
            self.scan_identifier_or_keyword(location);
        } else {
            self.scan_operator_or_punctuation(first, location);
        }
    }

    /// Consume `//` up to, but not including, the end of the line.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Consume `/* ... */`, diagnosing a comment still open at end of input.
    fn skip_block_comment(&mut self, location: SourceLocation) {
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match self.cursor.advance() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.diagnostics.push(Diagnostic {
                        location,
                        message: "unterminated block comment".to_string(),
                    });
                    return;
                }
            }
        }
    }

    /// Consume a string literal. A backslash consumes itself and the next
    /// character verbatim; a raw newline closes the literal early with a
    /// diagnostic; end of input closes it silently. The emitted lexeme always
    /// carries both quote characters.
    fn scan_string(&mut self, location: SourceLocation) {
        self.cursor.advance(); // opening quote
        let mut content = String::new();

        while let Some(ch) = self.cursor.advance() {
            match ch {
                '\\' => {
                    content.push('\\');
                    match self.cursor.advance() {
                        Some(escaped) => content.push(escaped),
                        None => break,
                    }
                }
                '"' => break,
                '\n' => {
                    self.diagnostics.push(Diagnostic {
                        location,
                        message: "unterminated string literal, closed at end of line".to_string(),
                    });
                    break;
                }
                _ => content.push(ch),
            }
        }

        let lexeme = format!("\"{}\"", content);
        self.tokens
            .push(Token::constant(lexeme, location, ValueType::Str));
        self.state.clear_declaration_context();
    }

    /// Consume a numeric literal: digits, optionally a dot and more digits.
    /// A second dot right after the fraction is left unconsumed; the token
    /// built so far is emitted along with a diagnostic.
    fn scan_number(&mut self, location: SourceLocation) {
        let mut text = String::new();
        let mut value_type = ValueType::Int;

        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }

        if self.cursor.peek() == Some('.') {
            value_type = ValueType::Double;
            text.push('.');
            self.cursor.advance();
            while let Some(c) = self.cursor.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            if self.cursor.peek() == Some('.') {
                self.diagnostics.push(Diagnostic {
                    location,
                    message: format!(
                        "malformed numeric literal \"{}\": unexpected second '.'",
                        text
                    ),
                });
            }
        }

        self.tokens
            .push(Token::constant(text, location, value_type));
        self.state.clear_declaration_context();
    }

    /// Consume an identifier or keyword lexeme and update the context flags.
    fn scan_identifier_or_keyword(&mut self, location: SourceLocation) {
        let mut lexeme = String::new();
        if let Some(first) = self.cursor.advance() {
            lexeme.push(first);
        }
        while let Some(c) = self.cursor.peek() {
            if is_identifier_part(c) {
                lexeme.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }

        if self.tables.is_keyword(&lexeme) {
            self.tokens
                .push(Token::new(TokenCategory::Keyword, lexeme.clone(), location));
            self.state.just_saw_class_keyword = lexeme == "class";
            // A built-in type or a capitalized keyword may open a declaration.
            let capitalized = lexeme.chars().next().map_or(false, |c| c.is_uppercase());
            if self.tables.is_builtin_type(&lexeme) || capitalized {
                self.state.pending_declared_type = Some(lexeme);
            } else {
                self.state.pending_declared_type = None;
            }
        } else {
            self.tokens.push(Token::new(
                TokenCategory::Identifier,
                lexeme.clone(),
                location,
            ));
            self.classify_identifier(&lexeme, location);
            self.state.clear_declaration_context();
        }
    }

    /// First-pass classification, run for every identifier token.
    ///
    /// A first sighting creates the table entry and assigns a role from the
    /// current context: class name after `class`, otherwise method when the
    /// very next character is `(`, otherwise parameter or field depending on
    /// the parameter-list flag. Repeat sightings only bump the occurrence
    /// count and may adopt a pending declared type the entry still lacks.
    fn classify_identifier(&mut self, lexeme: &str, location: SourceLocation) {
        if let Some(info) = self.symbols.get_mut(lexeme) {
            info.bump();
            if info.declared_type.is_none() {
                if let Some(pending) = &self.state.pending_declared_type {
                    info.declared_type = Some(pending.clone());
                }
            }
            return;
        }

        let mut info = SymbolInfo::new(lexeme, location);
        if self.state.just_saw_class_keyword {
            info.kind = SymbolKind::Class;
            self.state.current_class_name = Some(lexeme.to_string());
        } else if let Some(declared) = self.state.pending_declared_type.take() {
            info.kind = if self.cursor.peek() == Some('(') {
                SymbolKind::Method
            } else if self.state.inside_parameter_list {
                SymbolKind::Parameter
            } else {
                SymbolKind::Field
            };
            info.declared_type = Some(declared);
        }
        self.symbols.insert(info);
    }

    /// Consume a two-character operator, a punctuation character, a single
    /// operator, or a one-character Punctuation fallback for anything
    /// unrecognized.
    fn scan_operator_or_punctuation(&mut self, first: char, location: SourceLocation) {
        if let Some(second) = self.cursor.peek_ahead(1) {
            let pair = format!("{}{}", first, second);
            if self.tables.is_compound_operator(&pair) {
                self.cursor.advance();
                self.cursor.advance();
                self.tokens
                    .push(Token::new(TokenCategory::Operator, pair, location));
                self.state.clear_declaration_context();
                return;
            }
        }

        self.cursor.advance();
        if self.tables.is_punctuation_char(first) {
            if first == '(' {
                self.state.inside_parameter_list = true;
            } else if first == ')' {
                self.state.inside_parameter_list = false;
            }
            self.tokens.push(Token::new(
                TokenCategory::Punctuation,
                first.to_string(),
                location,
            ));
        } else if self.tables.is_operator_char(first) {
            self.tokens
                .push(Token::new(TokenCategory::Operator, first.to_string(), location));
        } else {
            self.tokens.push(Token::new(
                TokenCategory::Punctuation,
                first.to_string(),
                location,
            ));
        }
        self.state.clear_declaration_context();
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
