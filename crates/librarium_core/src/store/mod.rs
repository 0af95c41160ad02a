//! Flat-file persistence for the book collection.
//!
//! # Responsibility
//! - Load and rewrite the newline-delimited book file.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - Only books are persisted; borrowers and loans never touch disk.
//! - Store errors are never fatal to callers; they degrade to an empty
//!   collection (load) or a no-op (save).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod flat_file;

pub use flat_file::{FlatFileStore, DATA_FILE};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure opening or reading/writing the book file.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be opened for the attempted operation.
    Open { path: PathBuf, source: io::Error },
    /// Reading or writing failed after a successful open.
    Io(io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open book file `{}`: {source}", path.display())
            }
            Self::Io(err) => write!(f, "book file I/O failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
