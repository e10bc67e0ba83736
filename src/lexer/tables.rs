// Fixed membership tables for the scanned language.

use rustc_hash::FxHashSet;

/// Reserved words of the scanned language.
const KEYWORDS: &[&str] = &[
    "public", "private", "protected", "static", "final", "class", "int", "double", "void",
    "String", "new", "this", "return", "if", "else", "for", "while", "switch", "case", "break",
    "continue", "boolean", "true", "false",
];

/// Keywords that name a built-in type and may precede a declaration.
const BUILTIN_TYPES: &[&str] = &["int", "double", "boolean", "String", "void"];

/// Two-character operators, checked before any single-character match.
const COMPOUND_OPERATORS: &[&str] = &[
    "==", "<=", ">=", "!=", "++", "--", "+=", "-=", "*=", "/=", "&&", "||",
];

/// Visibility/storage modifiers examined by the refinement pass.
const MODIFIERS: &[&str] = &["public", "private", "protected", "static"];

const PUNCTUATION_CHARS: &[char] = &['(', ')', '{', '}', '[', ']', ',', ';'];

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '<', '>', '!', '=', '.', ':'];

/// Hashed membership tables built once per scanner (or refinement run).
pub struct Tables {
    keywords: FxHashSet<&'static str>,
    builtin_types: FxHashSet<&'static str>,
    compound_operators: FxHashSet<&'static str>,
    modifiers: FxHashSet<&'static str>,
    punctuation: FxHashSet<char>,
    operators: FxHashSet<char>,
}

impl Tables {
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            builtin_types: BUILTIN_TYPES.iter().copied().collect(),
            compound_operators: COMPOUND_OPERATORS.iter().copied().collect(),
            modifiers: MODIFIERS.iter().copied().collect(),
            punctuation: PUNCTUATION_CHARS.iter().copied().collect(),
            operators: OPERATOR_CHARS.iter().copied().collect(),
        }
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    pub fn is_builtin_type(&self, lexeme: &str) -> bool {
        self.builtin_types.contains(lexeme)
    }

    pub fn is_compound_operator(&self, pair: &str) -> bool {
        self.compound_operators.contains(pair)
    }

    pub fn is_modifier(&self, lexeme: &str) -> bool {
        self.modifiers.contains(lexeme)
    }

    pub fn is_punctuation_char(&self, ch: char) -> bool {
        self.punctuation.contains(&ch)
    }

    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operators.contains(&ch)
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_membership() {
        let tables = Tables::new();
        assert!(tables.is_keyword("class"));
        assert!(tables.is_keyword("String"));
        assert!(tables.is_keyword("true"));
        assert!(!tables.is_keyword("Integer"));
        assert!(!tables.is_keyword("main"));
    }

    #[test]
    fn test_builtin_types_are_keywords() {
        let tables = Tables::new();
        assert!(tables.is_builtin_type("int"));
        assert!(tables.is_builtin_type("void"));
        assert!(tables.is_builtin_type("boolean"));
        assert!(!tables.is_builtin_type("final"));
        // every built-in type must also be a reserved word
        for lexeme in BUILTIN_TYPES {
            assert!(tables.is_keyword(lexeme));
        }
    }

    #[test]
    fn test_operator_membership() {
        let tables = Tables::new();
        assert!(tables.is_compound_operator("=="));
        assert!(tables.is_compound_operator("||"));
        assert!(!tables.is_compound_operator("->"));
        assert!(tables.is_operator_char('.'));
        assert!(tables.is_operator_char(':'));
        assert!(!tables.is_operator_char('&'));
        assert!(tables.is_punctuation_char(';'));
        assert!(!tables.is_punctuation_char('@'));
    }

    #[test]
    fn test_modifier_membership() {
        let tables = Tables::new();
        assert!(tables.is_modifier("static"));
        assert!(tables.is_modifier("protected"));
        assert!(!tables.is_modifier("final"));
    }
}
