use librarium_core::{Book, Borrower, Loan};

#[test]
fn book_new_keeps_fields_verbatim() {
    let book = Book::new(3, "  Dune ", "");
    assert_eq!(book.id, 3);
    assert_eq!(book.title, "  Dune ");
    assert_eq!(book.author, "");
}

#[test]
fn borrower_new_keeps_fields_verbatim() {
    let borrower = Borrower::new(-1, "Ada", "ada@example.org");
    assert_eq!(borrower.id, -1);
    assert_eq!(borrower.name, "Ada");
    assert_eq!(borrower.contact, "ada@example.org");
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new(7, "Dune", "Herbert");

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Herbert");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn loan_opens_outstanding_and_closes_on_return() {
    let mut loan = Loan::open(4, 7, "2026-08-01");

    assert!(loan.is_outstanding());
    assert!(!loan.returned);
    assert_eq!(loan.return_date, "");

    loan.mark_returned("2026-08-15");
    assert!(!loan.is_outstanding());
    assert!(loan.returned);
    assert_eq!(loan.return_date, "2026-08-15");
    assert_eq!(loan.borrow_date, "2026-08-01");
}
