//! Book domain model.
//!
//! # Responsibility
//! - Define the persisted catalog record and its identity type.
//!
//! # Invariants
//! - `id` is supplied by the operator and never generated or rewritten.
//! - Duplicate ids are legal; delete-by-id removes every match.
//! - `title` and `author` are stored verbatim, untrimmed, possibly empty.

use serde::{Deserialize, Serialize};

/// Integer identity for a catalog book.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// One catalog entry, persisted to the flat book file.
///
/// Embedded newlines in `title` or `author` are not escaped by the store and
/// will corrupt the next load. Callers accept this limitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Operator-supplied id; not unique by contract.
    pub id: BookId,
    /// Title line, captured raw from input.
    pub title: String,
    /// Author line, captured raw from input.
    pub author: String,
}

impl Book {
    /// Creates a book record from operator input.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}
