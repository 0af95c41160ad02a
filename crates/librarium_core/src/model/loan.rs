//! Loan transaction schema.
//!
//! # Responsibility
//! - Declare the borrow/return record shape reserved for a future loan
//!   workflow.
//!
//! # Invariants
//! - No menu operation creates, reads, or persists loans today; the shape is
//!   carried so the stored model does not need to change when the workflow
//!   lands.

use crate::model::book::BookId;
use crate::model::borrower::BorrowerId;
use serde::{Deserialize, Serialize};

/// A single borrow/return transaction linking a borrower to a book.
///
/// Referential integrity against the catalog is not enforced; the ids here
/// are plain values, not validated references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub borrower_id: BorrowerId,
    pub book_id: BookId,
    /// Free-form date text; no calendar validation.
    pub borrow_date: String,
    /// Empty until the book comes back.
    pub return_date: String,
    pub returned: bool,
}

impl Loan {
    /// Opens a loan with no return recorded yet.
    pub fn open(
        borrower_id: BorrowerId,
        book_id: BookId,
        borrow_date: impl Into<String>,
    ) -> Self {
        Self {
            borrower_id,
            book_id,
            borrow_date: borrow_date.into(),
            return_date: String::new(),
            returned: false,
        }
    }

    /// Records the return date and closes the loan.
    pub fn mark_returned(&mut self, return_date: impl Into<String>) {
        self.return_date = return_date.into();
        self.returned = true;
    }

    /// Returns whether the book is still out.
    pub fn is_outstanding(&self) -> bool {
        !self.returned
    }
}
