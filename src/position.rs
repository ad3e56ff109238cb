//! Cursor position within a document
//!
//! A (line, column) pair captured when suggestions are generated and compared
//! against the live cursor on every cache lookup.

use serde::{Deserialize, Serialize};

/// A cursor location in a document, as (line, column).
///
/// Both coordinates are whatever the host editor reports; the cache only ever
/// compares positions for equality, so the indexing convention (0- or 1-based)
/// is the caller's to keep consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CursorPosition {
    /// Line number within the document
    pub line: u32,
    /// Column within the line
    pub column: u32,
}

impl CursorPosition {
    /// Create a position from a (line, column) pair
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<(u32, u32)> for CursorPosition {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

impl std::fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
