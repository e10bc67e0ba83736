//! Insertion-ordered symbol table keyed by identifier text.
//!
//! One entry per distinct identifier lexeme across the whole input. Names are
//! not scope-qualified, so a field and an unrelated local sharing a name merge
//! into a single entry; this is an inherent characteristic of the table, not
//! something later passes try to repair. Entries keep first-seen order and are
//! never removed.

use std::fmt;

use indexmap::IndexMap;

use crate::lexer::cursor::SourceLocation;

/// Syntactic role attributed to an identifier. `Unknown` until some heuristic
/// claims otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Method,
    Field,
    Parameter,
    Local,
    Unknown,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Field => "field",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Local => "local",
            SymbolKind::Unknown => "unknown",
        };
        // pad() keeps width specifiers working in the report listings
        f.pad(name)
    }
}

/// Classification record for one identifier.
///
/// `first_location` is fixed at creation; `kind` and `declared_type` may be
/// revised by the first-pass heuristics and again by the refinement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: SymbolKind,
    pub declared_type: Option<String>,
    pub first_location: SourceLocation,
    pub occurrences: usize,
}

impl SymbolInfo {
    pub fn new(name: &str, location: SourceLocation) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Unknown,
            declared_type: None,
            first_location: location,
            occurrences: 1,
        }
    }

    /// Count one more sighting of this name.
    pub fn bump(&mut self) {
        self.occurrences += 1;
    }
}

/// Mapping from identifier text to its classification, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SymbolInfo> {
        self.entries.get_mut(name)
    }

    /// Insert a fresh entry, keyed by its name. An existing entry for the
    /// same name is replaced, so callers check [`get_mut`](Self::get_mut)
    /// first when merging sightings.
    pub fn insert(&mut self, info: SymbolInfo) {
        self.entries.insert(info.name.clone(), info);
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.entries.values()
    }
}
