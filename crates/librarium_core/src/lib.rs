//! Core logic for Librarium, a single-user library catalog manager.
//! This crate owns the records, the flat-file store, and the menu session;
//! binaries only wire streams in.

pub mod logging;
pub mod menu;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use menu::run_session;
pub use model::book::{Book, BookId};
pub use model::borrower::{Borrower, BorrowerId};
pub use model::loan::Loan;
pub use repo::catalog::Catalog;
pub use service::library_service::LibraryService;
pub use store::{FlatFileStore, StoreError, StoreResult, DATA_FILE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
