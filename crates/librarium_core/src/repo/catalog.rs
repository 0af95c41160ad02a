//! Ordered in-memory collections for books and borrowers.
//!
//! # Responsibility
//! - Provide append/scan/remove primitives over the two live collections.
//!
//! # Invariants
//! - `remove_books` deletes every record matching the id, not just the first.
//! - `replace_books` is the only wholesale mutation; it exists for the load
//!   path.
//! - Borrowers have no remove operation at all.

use crate::model::book::{Book, BookId};
use crate::model::borrower::Borrower;

/// The process-lifetime record store.
///
/// Owned by the caller and passed by mutable reference into handlers; there
/// is no global instance.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    borrowers: Vec<Borrower>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book at the end of the collection.
    ///
    /// Duplicate ids are accepted silently.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book whose id matches `id`.
    ///
    /// Returns how many records were removed; `0` means the id was absent
    /// and the collection is unchanged.
    pub fn remove_books(&mut self, id: BookId) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        before - self.books.len()
    }

    /// Replaces the whole book collection, used when loading from the store.
    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends a borrower at the end of the collection.
    pub fn add_borrower(&mut self, borrower: Borrower) {
        self.borrowers.push(borrower);
    }

    /// Borrowers in insertion order.
    pub fn borrowers(&self) -> &[Borrower] {
        &self.borrowers
    }
}
