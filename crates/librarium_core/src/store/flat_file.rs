//! Newline-delimited book file reader/writer.
//!
//! # Responsibility
//! - Parse and emit the three-lines-per-record book format.
//! - Emit `books_load`/`books_save` logging events around file I/O.
//!
//! # Invariants
//! - Save fully rewrites the file in current in-memory order; there is no
//!   append path and no partial update.
//! - An id line that fails to parse ends the load early and silently,
//!   discarding any partially-read trailing record.
//! - Titles and authors are written verbatim; an embedded newline corrupts
//!   the next load. Known limitation, kept for compatibility with existing
//!   files.

use super::{StoreError, StoreResult};
use crate::model::book::Book;
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Well-known book file name, resolved against the working directory.
pub const DATA_FILE: &str = "books.txt";

/// Flat-file store bound to one book file path.
pub struct FlatFileStore {
    path: PathBuf,
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DATA_FILE)
    }
}

impl FlatFileStore {
    /// Creates a store over an explicit path; tests point this at temp dirs.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The bound file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole book collection from disk.
    ///
    /// Records are triples of lines: id, title, author. Blank lines before an
    /// id line are skipped. A record whose title or author line is missing at
    /// end of input is kept with the absent fields empty.
    ///
    /// # Errors
    /// - `StoreError::Open` when the file is missing or unreadable; callers
    ///   treat this as "start fresh" rather than a failure.
    pub fn load_books(&self) -> StoreResult<Vec<Book>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                warn!(
                    "event=books_load module=store status=missing path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(StoreError::Open {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let mut lines = BufReader::new(file).lines();
        let mut books = Vec::new();

        loop {
            // Leading blank lines are tolerated the way whitespace-skipping
            // integer extraction tolerated them in older data files.
            let id_line = loop {
                match lines.next() {
                    Some(line) => {
                        let line = line?;
                        if !line.trim().is_empty() {
                            break line;
                        }
                    }
                    None => {
                        info!(
                            "event=books_load module=store status=ok path={} records={}",
                            self.path.display(),
                            books.len()
                        );
                        return Ok(books);
                    }
                }
            };

            let id = match id_line.trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    // Malformed id line: stop silently, keep what parsed so far.
                    warn!(
                        "event=books_load module=store status=truncated path={} records={}",
                        self.path.display(),
                        books.len()
                    );
                    return Ok(books);
                }
            };

            let title = match lines.next() {
                Some(line) => line?,
                None => String::new(),
            };
            let author = match lines.next() {
                Some(line) => line?,
                None => String::new(),
            };

            books.push(Book { id, title, author });
        }
    }

    /// Overwrites the book file with the given collection.
    ///
    /// # Errors
    /// - `StoreError::Open` when the file cannot be opened for writing; the
    ///   on-disk data is left untouched in that case.
    /// - `StoreError::Io` when a write fails after the open succeeded.
    pub fn save_books(&self, books: &[Book]) -> StoreResult<()> {
        let file = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(
                    "event=books_save module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(StoreError::Open {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let mut out = BufWriter::new(file);
        for book in books {
            writeln!(out, "{}", book.id)?;
            writeln!(out, "{}", book.title)?;
            writeln!(out, "{}", book.author)?;
        }
        out.flush()?;

        info!(
            "event=books_save module=store status=ok path={} records={}",
            self.path.display(),
            books.len()
        );
        Ok(())
    }
}
