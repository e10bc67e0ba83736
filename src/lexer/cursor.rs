//! Character cursor over in-memory source text.
//!
//! The whole input is buffered as a `Vec<char>` so lookahead never has to
//! re-decode UTF-8. Lines and columns are 1-based; consuming a newline
//! increments the line counter and resets the column to 1.

use std::fmt;

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Character cursor with line/column tracking.
///
/// End of input is always observable as `None` from [`peek`](Cursor::peek)
/// and [`advance`](Cursor::advance); there is no sentinel character and no
/// out-of-bounds panic.
pub struct Cursor {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Peek at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters past the current one.
    pub fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Consume and return the current character, updating line/column.
    pub fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Location of the next character to be consumed.
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
