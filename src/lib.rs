//! # Introduction
//!
//! tokava scans Java-flavored source text and produces an ordered token
//! stream plus a symbol table that classifies each identifier's syntactic
//! role (class, method, field, parameter, local or unknown) using positional
//! heuristics instead of a full grammar.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → tokens + first-pass symbols → Refinement → Report
//! ```
//!
//! 1. [`lexer`]: character-level scanning into categorized tokens, with the
//!    online classification heuristics and advisory diagnostics.
//! 2. [`symbols`]: the insertion-ordered symbol table and the offline
//!    refinement pass over the finished token list.
//! 3. [`report`]: aligned console listings of both results, with optional
//!    terminal colors.
//!
//! Scanning never fails: malformed literals surface as advisory
//! [`lexer::scanner::Diagnostic`] records in the returned
//! [`lexer::scanner::ScanOutput`], and unrecognized characters fall back to
//! one-character punctuation tokens.

pub mod lexer;
pub mod report;
pub mod symbols;
