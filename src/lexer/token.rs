//! Token records produced by the scanner.

use std::fmt;

use super::cursor::SourceLocation;

/// Coarse token class. Closed set; both classification passes match on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Keyword,
    Operator,
    Identifier,
    Constant,
    Punctuation,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Operator => "Operator",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Constant => "Constant",
            TokenCategory::Punctuation => "Punctuation",
        };
        // pad() keeps width specifiers working in the report listings
        f.pad(name)
    }
}

/// Value tag attached to constant tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Double,
    Str,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Int => "int",
            ValueType::Double => "double",
            ValueType::Str => "string",
        };
        f.pad(name)
    }
}

/// One token, created when its lexeme has been fully consumed and never
/// mutated afterward.
///
/// `lexeme` is the exact source text matched (string constants keep their
/// surrounding quotes); `location` is the position of the token's first
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
    pub location: SourceLocation,
    pub value_type: Option<ValueType>,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: String, location: SourceLocation) -> Self {
        Self {
            category,
            lexeme,
            location,
            value_type: None,
        }
    }

    /// Build a Constant token carrying a value tag.
    pub fn constant(lexeme: String, location: SourceLocation, value_type: ValueType) -> Self {
        Self {
            category: TokenCategory::Constant,
            lexeme,
            location,
            value_type: Some(value_type),
        }
    }
}
