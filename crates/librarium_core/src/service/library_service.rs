//! Library use-case service.
//!
//! # Responsibility
//! - Provide the add/list/delete operations the menu dispatches to.
//! - Re-save the book file synchronously after every successful book
//!   mutation.
//!
//! # Invariants
//! - In-memory mutation always lands before the save is attempted; a failed
//!   save leaves the live collection mutated and reports the error upward.
//! - Borrower operations never touch the store.

use crate::model::book::{Book, BookId};
use crate::model::borrower::Borrower;
use crate::repo::catalog::Catalog;
use crate::store::{FlatFileStore, StoreResult};
use log::{info, warn};

/// Operation handlers over one catalog and one book file.
pub struct LibraryService {
    catalog: Catalog,
    store: FlatFileStore,
}

impl LibraryService {
    /// Creates a service over an empty catalog and the given store.
    pub fn new(store: FlatFileStore) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
        }
    }

    /// Replaces the in-memory books with the store's contents at startup.
    ///
    /// Returns the number of records loaded.
    ///
    /// # Errors
    /// - Propagates `StoreError::Open` for a missing or unreadable file; the
    ///   catalog is left untouched (empty at startup) so the caller can
    ///   announce a fresh start and continue.
    pub fn load_catalog(&mut self) -> StoreResult<usize> {
        let books = self.store.load_books()?;
        let count = books.len();
        self.catalog.replace_books(books);
        Ok(count)
    }

    /// Appends a book and immediately re-saves the whole file.
    ///
    /// The in-memory append always takes effect; a save error is returned
    /// with the book already added.
    pub fn add_book(&mut self, book: Book) -> StoreResult<()> {
        let id = book.id;
        self.catalog.add_book(book);
        let result = self.store.save_books(self.catalog.books());
        match &result {
            Ok(()) => info!("event=book_add module=service status=ok id={id}"),
            Err(err) => warn!("event=book_add module=service status=unsaved id={id} error={err}"),
        }
        result
    }

    /// Removes every book matching `id` and re-saves if anything changed.
    ///
    /// Returns the number of removed records; `Ok(0)` means not found and the
    /// file was not rewritten. A save error is returned with the removal
    /// already applied in memory.
    pub fn delete_book(&mut self, id: BookId) -> StoreResult<usize> {
        let removed = self.catalog.remove_books(id);
        if removed == 0 {
            info!("event=book_delete module=service status=not_found id={id}");
            return Ok(0);
        }
        match self.store.save_books(self.catalog.books()) {
            Ok(()) => {
                info!("event=book_delete module=service status=ok id={id} removed={removed}");
                Ok(removed)
            }
            Err(err) => {
                warn!(
                    "event=book_delete module=service status=unsaved id={id} removed={removed} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Books in insertion order.
    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    /// Appends a borrower; memory only, nothing is persisted.
    pub fn add_borrower(&mut self, borrower: Borrower) {
        info!(
            "event=borrower_add module=service status=ok id={}",
            borrower.id
        );
        self.catalog.add_borrower(borrower);
    }

    /// Borrowers in insertion order.
    pub fn borrowers(&self) -> &[Borrower] {
        self.catalog.borrowers()
    }
}
