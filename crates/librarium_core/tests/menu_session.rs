use librarium_core::{run_session, FlatFileStore, LibraryService};
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(dir: &TempDir, script: &str) -> String {
    let mut service = LibraryService::new(FlatFileStore::new(dir.path().join("books.txt")));
    let mut input = Cursor::new(script.to_string());
    let mut out = Vec::new();
    run_session(&mut input, &mut out, &mut service).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn first_run_announces_fresh_start_and_exits_on_six() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "6\n");

    assert!(output.contains("No existing data found. Starting fresh."));
    assert!(output.contains("Welcome to the Library Management System!"));
    assert!(output.contains("Exiting program. Goodbye!"));
}

#[test]
fn add_list_delete_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\n1\nDune\nHerbert\n2\n3\n1\n2\n6\n");

    assert!(output.contains("Book added successfully!"));
    assert!(output.contains("List of Books:"));
    assert_eq!(
        output.matches("ID: 1, Title: Dune, Author: Herbert").count(),
        1
    );
    assert!(output.contains("Book deleted successfully!"));
    assert!(output.contains("No books in the library."));

    // A fresh process over the same file sees the empty catalog.
    let mut reopened = LibraryService::new(FlatFileStore::new(dir.path().join("books.txt")));
    assert_eq!(reopened.load_catalog().unwrap(), 0);
    assert!(reopened.books().is_empty());
}

#[test]
fn two_books_sharing_an_id_persist_and_delete_together() {
    let dir = TempDir::new().unwrap();
    let output = run_script(
        &dir,
        "1\n7\nEmma\nAusten\n1\n7\nPersuasion\nAusten\n6\n",
    );
    assert_eq!(output.matches("Book added successfully!").count(), 2);

    // Second session: both copies came back from disk, one delete takes both.
    let output = run_script(&dir, "2\n3\n7\n2\n6\n");
    assert!(output.contains("ID: 7, Title: Emma, Author: Austen"));
    assert!(output.contains("ID: 7, Title: Persuasion, Author: Austen"));
    assert!(output.contains("Book deleted successfully!"));
    assert!(output.contains("No books in the library."));
}

#[test]
fn deleting_an_unknown_id_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\n1\nDune\nHerbert\n3\n99\n2\n6\n");

    assert!(output.contains("Book not found."));
    assert_eq!(
        output.matches("ID: 1, Title: Dune, Author: Herbert").count(),
        1
    );
}

#[test]
fn invalid_menu_entries_reprompt_and_recover() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "abc\n\n9\n6\n");

    assert_eq!(
        output
            .matches("Invalid input. Please enter a valid option: ")
            .count(),
        2
    );
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Exiting program. Goodbye!"));
}

#[test]
fn invalid_book_id_entry_reprompts_then_accepts() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\nnot-a-number\n12\nSolaris\nLem\n2\n6\n");

    assert!(output.contains("Invalid input. Please enter a valid numeric book ID: "));
    assert!(output.contains("ID: 12, Title: Solaris, Author: Lem"));
}

#[test]
fn borrowers_list_empty_then_shows_added_entries() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "5\n4\n4\nAda Lovelace\nada@example.org\n5\n6\n");

    assert!(output.contains("No borrowers in the system."));
    assert!(output.contains("Borrower added successfully!"));
    assert!(output.contains("List of Borrowers:"));
    assert!(output.contains("ID: 4, Name: Ada Lovelace, Contact: ada@example.org"));
}

#[test]
fn titles_are_captured_raw_and_may_be_empty() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\n2\n  padded title \n\n2\n6\n");

    assert!(output.contains("ID: 2, Title:   padded title , Author: "));
}
