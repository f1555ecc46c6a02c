use std::cell::Cell;
use std::rc::Rc;

use biblio_catalog::shell::{run, Shell};
use biblio_catalog::{Catalog, LoanPolicy};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap()
}

// Helper to create a shell whose clock the test controls
fn setup_shell() -> (Shell, Rc<Cell<DateTime<Utc>>>) {
    let now = Rc::new(Cell::new(start()));
    let clock = Rc::clone(&now);
    let shell = Shell::new(
        Catalog::with_policy(LoanPolicy::default()),
        "rupees",
        Box::new(move || clock.get()),
    );
    (shell, now)
}

fn run_script(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    run(shell, script.as_bytes(), &mut out).expect("in-memory I/O cannot fail");
    String::from_utf8(out).expect("output is UTF-8")
}

#[test]
fn test_add_list_and_search_session() {
    let (mut shell, _) = setup_shell();

    let out = run_script(
        &mut shell,
        "1\nThe Hobbit\nJ.R.R. Tolkien\n978-0547928227\n2\n\
         1\nDune\nFrank Herbert\n978-0441013593\nlots\n\
         1\nSomething\nSomeone\n978-0547928227\n1\n\
         4\n\
         5\nhob\n\
         5\n\n\
         5\nasimov\n\
         7\n",
    );

    assert!(out.contains("Book added successfully."));
    assert!(out.contains(
        "All fields must be filled, and 'Available Copies' must be a valid number."
    ));
    assert!(out.contains("A book with the same ISBN already exists in the library."));
    assert!(out.contains(
        "All Books in the Library:\n\
         Title: The Hobbit, Author: J.R.R. Tolkien, ISBN: 978-0547928227, Available Copies: 2\n"
    ));
    assert!(out.contains(
        "Matching Books:\n\
         Title: The Hobbit, Author: J.R.R. Tolkien, ISBN: 978-0547928227, Available Copies: 2\n"
    ));
    assert!(out.contains("Search query must not be empty."));
    assert!(out.contains("No matching books found."));
    assert!(out.ends_with("Exiting Library Management System. Goodbye!\n"));

    assert_eq!(shell.catalog.list_all().unwrap().len(), 1);
}

#[test]
fn test_borrow_and_late_return_session() {
    let (mut shell, now) = setup_shell();
    run_script(&mut shell, "1\nFoundation\nIsaac Asimov\n978-0553293357\n1\n7\n");

    let out = run_script(&mut shell, "2\n978-0553293357\n2\n978-0553293357\n2\n\n2\nmissing\n7\n");
    assert_eq!(out.matches("Book borrowed successfully.").count(), 1);
    assert_eq!(out.matches("Book not found or no available copies.").count(), 2);
    assert!(out.contains("ISBN field must not be empty."));

    now.set(start() + TimeDelta::days(20));
    let out = run_script(&mut shell, "3\n978-0553293357\n3\n978-0553293357\n3\nmissing\n7\n");
    assert!(out.contains("Late fees for this book: 12.00 rupees"));
    assert!(out.contains("You can only return a borrowed book."));
    assert!(out.contains("Book not found."));

    let book = shell.catalog.find_by_isbn("978-0553293357").unwrap().unwrap();
    assert_eq!(book.available_copies, 1);
    assert!(!book.is_borrowed);
}

#[test]
fn test_export_prints_json() {
    let (mut shell, _) = setup_shell();
    run_script(&mut shell, "1\nDune\nFrank Herbert\n978-0441013593\n4\n2\n978-0441013593\n7\n");

    let out = run_script(&mut shell, "6\n7\n");
    let start_idx = out.find('[').expect("JSON array in output");
    let end_idx = out.rfind(']').expect("JSON array in output");
    let books: serde_json::Value = serde_json::from_str(&out[start_idx..=end_idx]).unwrap();

    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["available_copies"], 3);
    assert_eq!(books[0]["is_borrowed"], true);
    assert!(books[0]["borrowed_date"].is_string());
}

#[test]
fn test_invalid_choice_and_end_of_input() {
    let (mut shell, _) = setup_shell();

    let out = run_script(&mut shell, "9\n");

    assert!(out.contains("Invalid choice. Please select an option from the menu."));
    assert!(out.contains("1. Add Book"));
    assert!(out.contains("7. Quit"));
    assert!(out.ends_with("Exiting Library Management System. Goodbye!\n"));
}

#[test]
fn test_input_ending_mid_form() {
    let (mut shell, _) = setup_shell();

    let out = run_script(&mut shell, "1\nHalf a Title\n");

    assert!(out.ends_with("Exiting Library Management System. Goodbye!\n"));
    assert!(shell.catalog.list_all().unwrap().is_empty());
}

#[test]
fn test_whitespace_only_fields_count_as_empty() {
    let (mut shell, _) = setup_shell();

    let out = run_script(&mut shell, "5\n   \n2\n \t \n7\n");

    assert!(out.contains("Search query must not be empty."));
    assert!(out.contains("ISBN field must not be empty."));
}
