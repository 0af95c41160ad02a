//! Borrower domain model.
//!
//! # Responsibility
//! - Define the in-memory borrower record.
//!
//! # Invariants
//! - Borrowers live for the process lifetime only; they are never persisted.
//! - No delete or edit operation exists for borrowers.

use serde::{Deserialize, Serialize};

/// Integer identity for a borrower.
pub type BorrowerId = i64;

/// One registered borrower, held in memory until the process exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    /// Operator-supplied id; not unique by contract.
    pub id: BorrowerId,
    /// Name line, captured raw from input.
    pub name: String,
    /// Contact line, captured raw from input.
    pub contact: String,
}

impl Borrower {
    /// Creates a borrower record from operator input.
    pub fn new(id: BorrowerId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }
}
