//! Interactive menu session.
//!
//! # Responsibility
//! - Drive the fixed six-option menu loop from startup load to farewell.
//! - Render all operator-facing text; lower layers never print.
//!
//! # Invariants
//! - Exactly one terminal state: choice 6. Every other input, valid or not,
//!   re-enters the loop.
//! - Store failures become console notices and the session continues; no
//!   handled error ends the process.
//!
//! The session is generic over its reader/writer so tests can script a whole
//! run through in-memory buffers.

pub mod input;

use crate::model::book::Book;
use crate::model::borrower::Borrower;
use crate::service::library_service::LibraryService;
use input::{read_int, read_raw_line};
use log::info;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nMenu:\n\
1. Add Book\n\
2. View Books\n\
3. Delete Book\n\
4. Add Borrower\n\
5. View Borrowers\n\
6. Exit\n\
Enter your choice: ";
const MENU_RETRY: &str = "Invalid input. Please enter a valid option: ";
const BOOK_ID_RETRY: &str = "Invalid input. Please enter a valid numeric book ID: ";
const BORROWER_ID_RETRY: &str = "Invalid input. Please enter a valid numeric borrower ID: ";
const SAVE_FAILED: &str = "Error: Unable to save data to file.";

/// Runs one interactive session over the given streams.
///
/// Loads the catalog first (a missing file announces a fresh start), then
/// loops on the menu until the exit choice. Returns `Err` only for I/O
/// failures on the streams themselves, including end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &mut LibraryService,
) -> io::Result<()> {
    match service.load_catalog() {
        Ok(count) => info!("event=session_start module=menu status=ok loaded={count}"),
        Err(err) => {
            writeln!(out, "No existing data found. Starting fresh.")?;
            info!("event=session_start module=menu status=fresh error={err}");
        }
    }

    writeln!(out, "Welcome to the Library Management System!")?;

    loop {
        let choice = read_int(input, out, MENU, MENU_RETRY)?;
        match choice {
            1 => add_book(input, out, service)?,
            2 => list_books(out, service)?,
            3 => delete_book(input, out, service)?,
            4 => add_borrower(input, out, service)?,
            5 => list_borrowers(out, service)?,
            6 => {
                writeln!(out, "Exiting program. Goodbye!")?;
                info!("event=session_end module=menu status=ok");
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn add_book<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &mut LibraryService,
) -> io::Result<()> {
    let id = read_int(input, out, "Enter book ID: ", BOOK_ID_RETRY)?;
    let title = read_raw_line(input, out, "Enter book title: ")?;
    let author = read_raw_line(input, out, "Enter book author: ")?;

    if service.add_book(Book::new(id, title, author)).is_err() {
        writeln!(out, "{SAVE_FAILED}")?;
    }
    // The record is in memory either way.
    writeln!(out, "Book added successfully!")
}

fn list_books<W: Write>(out: &mut W, service: &LibraryService) -> io::Result<()> {
    if service.books().is_empty() {
        return writeln!(out, "No books in the library.");
    }
    writeln!(out, "\nList of Books:")?;
    for book in service.books() {
        writeln!(
            out,
            "ID: {}, Title: {}, Author: {}",
            book.id, book.title, book.author
        )?;
    }
    Ok(())
}

fn delete_book<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &mut LibraryService,
) -> io::Result<()> {
    let id = read_int(input, out, "Enter the book ID to delete: ", BOOK_ID_RETRY)?;
    match service.delete_book(id) {
        Ok(0) => writeln!(out, "Book not found."),
        Ok(_) => writeln!(out, "Book deleted successfully!"),
        Err(_) => {
            writeln!(out, "{SAVE_FAILED}")?;
            writeln!(out, "Book deleted successfully!")
        }
    }
}

fn add_borrower<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    service: &mut LibraryService,
) -> io::Result<()> {
    let id = read_int(input, out, "Enter borrower ID: ", BORROWER_ID_RETRY)?;
    let name = read_raw_line(input, out, "Enter borrower name: ")?;
    let contact = read_raw_line(input, out, "Enter borrower contact: ")?;

    service.add_borrower(Borrower::new(id, name, contact));
    writeln!(out, "Borrower added successfully!")
}

fn list_borrowers<W: Write>(out: &mut W, service: &LibraryService) -> io::Result<()> {
    if service.borrowers().is_empty() {
        return writeln!(out, "No borrowers in the system.");
    }
    writeln!(out, "\nList of Borrowers:")?;
    for borrower in service.borrowers() {
        writeln!(
            out,
            "ID: {}, Name: {}, Contact: {}",
            borrower.id, borrower.name, borrower.contact
        )?;
    }
    Ok(())
}
