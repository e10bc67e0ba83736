//! Refinement pass over the finished token list.
//!
//! The online heuristics only see context to the left of each identifier, so
//! they misread a few shapes: a method name separated from its parenthesis by
//! whitespace, or a local variable that scanned as a field. This pass walks
//! the complete token list with a three-token window and corrects those:
//!
//! - `<type-like keyword> <identifier> <"(">` reclassifies the identifier as
//!   a method, overwriting any earlier guess.
//! - `<type-like keyword> <identifier> <"=" | ";" | ",">` reclassifies it as
//!   a field when a visibility/storage modifier appears within the six tokens
//!   before the keyword, otherwise as a local. Method, parameter and class
//!   assignments are never downgraded by this rule; the declared type is
//!   recorded either way.
//! - `class` followed by an identifier marks it as a class name
//!   unconditionally.
//!
//! A keyword is type-like when it names a built-in type or does not start
//! with a lowercase letter. Running the pass a second time changes nothing.

use crate::lexer::tables::Tables;
use crate::lexer::token::{Token, TokenCategory};

use super::table::{SymbolKind, SymbolTable};

/// Correct and fill in symbol roles using the whole token list. Mutates the
/// table in place; tokens are read-only.
pub fn refine(tokens: &[Token], symbols: &mut SymbolTable) {
    let tables = Tables::new();

    for i in 0..tokens.len() {
        let keyword = &tokens[i];
        if keyword.category != TokenCategory::Keyword {
            continue;
        }

        if is_type_like(&tables, &keyword.lexeme) && i + 2 < tokens.len() {
            let cand = &tokens[i + 1];
            let follow = &tokens[i + 2];
            if cand.category == TokenCategory::Identifier {
                if follow.category == TokenCategory::Punctuation && follow.lexeme == "(" {
                    if let Some(info) = symbols.get_mut(&cand.lexeme) {
                        info.kind = SymbolKind::Method;
                        info.declared_type = Some(keyword.lexeme.clone());
                    }
                } else if is_declaration_follow(follow) {
                    if let Some(info) = symbols.get_mut(&cand.lexeme) {
                        if kind_is_revisable(info.kind) {
                            info.kind = if has_modifier_before(&tables, tokens, i) {
                                SymbolKind::Field
                            } else {
                                SymbolKind::Local
                            };
                        }
                        info.declared_type = Some(keyword.lexeme.clone());
                    }
                }
            }
        }

        if keyword.lexeme == "class" && i + 1 < tokens.len() {
            let cand = &tokens[i + 1];
            if cand.category == TokenCategory::Identifier {
                if let Some(info) = symbols.get_mut(&cand.lexeme) {
                    info.kind = SymbolKind::Class;
                }
            }
        }
    }
}

fn is_type_like(tables: &Tables, lexeme: &str) -> bool {
    tables.is_builtin_type(lexeme) || lexeme.chars().next().map_or(false, |c| !c.is_lowercase())
}

/// Token shapes that can follow a declared name: initializer, end of
/// statement, or the comma between declarators.
fn is_declaration_follow(token: &Token) -> bool {
    match token.category {
        TokenCategory::Operator => token.lexeme == "=",
        TokenCategory::Punctuation => token.lexeme == ";" || token.lexeme == ",",
        _ => false,
    }
}

/// Unknown, field and local guesses may be rewritten; method, parameter and
/// class assignments stand.
fn kind_is_revisable(kind: SymbolKind) -> bool {
    matches!(
        kind,
        SymbolKind::Unknown | SymbolKind::Field | SymbolKind::Local
    )
}

/// Look for a modifier keyword within the six tokens before `index`.
fn has_modifier_before(tables: &Tables, tokens: &[Token], index: usize) -> bool {
    let start = index.saturating_sub(6);
    tokens[start..index]
        .iter()
        .any(|t| t.category == TokenCategory::Keyword && tables.is_modifier(&t.lexeme))
}
