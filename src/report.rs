//! Console rendering of the token listing and the symbol table.
//!
//! The plain formats mirror the classic fixed-width layout:
//! `line:col  "lexeme"  Category  <valueType>` per token and
//! `name  kind  declaredType  line:col  occurrences=N` per symbol. Color is
//! applied per category/kind on top of the already padded cells, so colored
//! and plain output align identically.

use crossterm::style::{Color, Stylize};

use crate::lexer::token::{Token, TokenCategory};
use crate::symbols::table::{SymbolInfo, SymbolKind, SymbolTable};

pub struct Theme {
    pub keyword: Color,
    pub operator: Color,
    pub identifier: Color,
    pub constant: Color,
    pub punctuation: Color,
    pub method: Color,
    pub class_name: Color,
    pub heading: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    keyword: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    }, // Blue
    operator: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    }, // Teal
    identifier: Color::Rgb {
        r: 205,
        g: 214,
        b: 244,
    },
    constant: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    }, // Orange
    punctuation: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    }, // Grey
    method: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    }, // Yellow
    class_name: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    }, // Teal
    heading: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    }, // Yellow
};

impl Theme {
    pub fn category_color(&self, category: TokenCategory) -> Color {
        match category {
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Operator => self.operator,
            TokenCategory::Identifier => self.identifier,
            TokenCategory::Constant => self.constant,
            TokenCategory::Punctuation => self.punctuation,
        }
    }

    pub fn kind_color(&self, kind: SymbolKind) -> Color {
        match kind {
            SymbolKind::Class => self.class_name,
            SymbolKind::Method => self.method,
            SymbolKind::Field | SymbolKind::Parameter | SymbolKind::Local => self.identifier,
            SymbolKind::Unknown => self.punctuation,
        }
    }
}

/// One plain token line in the fixed-width layout. The lexeme is shown
/// quoted, so string constants appear with doubled quotes.
pub fn token_line(token: &Token) -> String {
    let quoted = format!("\"{}\"", token.lexeme);
    let tag = match token.value_type {
        Some(value_type) => format!(" <{}>", value_type),
        None => String::new(),
    };
    format!(
        "{:>3}:{:<3}  {:<30} {:<12}{}",
        token.location.line, token.location.column, quoted, token.category, tag
    )
}

/// One plain symbol line: name, kind, declared type (`-` when absent),
/// first position, occurrence count.
pub fn symbol_line(info: &SymbolInfo) -> String {
    format!(
        "{:<20} {:<12} {:<12} {:>4}:{:<3}  occurrences={}",
        info.name,
        info.kind,
        info.declared_type.as_deref().unwrap_or("-"),
        info.first_location.line,
        info.first_location.column,
        info.occurrences
    )
}

/// The token listing with its heading, one line per token.
pub fn render_tokens(tokens: &[Token], colored: bool) -> String {
    let mut out = String::new();
    out.push_str(&paint("=== Tokens ===", DEFAULT_THEME.heading, colored));
    out.push('\n');
    for token in tokens {
        let line = token_line(token);
        let color = DEFAULT_THEME.category_color(token.category);
        out.push_str(&paint(&line, color, colored));
        out.push('\n');
    }
    out
}

/// The symbol table listing, preceded by a blank line, in first-seen order.
pub fn render_symbols(symbols: &SymbolTable, colored: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&paint("=== Symbol Table ===", DEFAULT_THEME.heading, colored));
    out.push('\n');
    for info in symbols.iter() {
        let line = symbol_line(info);
        let color = DEFAULT_THEME.kind_color(info.kind);
        out.push_str(&paint(&line, color, colored));
        out.push('\n');
    }
    out
}

fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
