use crate::domain::{BookRepository, DomainError};
use crate::models::NewBook;
use crate::services::Catalog;

const DEMO_BOOKS: &[(&str, &str, &str, &str)] = &[
    ("The Hobbit", "J.R.R. Tolkien", "978-0547928227", "3"),
    ("The Fellowship of the Ring", "J.R.R. Tolkien", "978-0547928210", "2"),
    ("Foundation", "Isaac Asimov", "978-0553293357", "2"),
    ("I, Robot", "Isaac Asimov", "978-0553382563", "1"),
    ("Dune", "Frank Herbert", "978-0441013593", "4"),
];

/// Add the demo titles, skipping ISBNs already catalogued.
/// Returns the number of books added.
pub fn seed_demo_data<R: BookRepository>(catalog: &mut Catalog<R>) -> Result<usize, DomainError> {
    let mut added = 0;

    for (title, author, isbn, copies) in DEMO_BOOKS {
        match catalog.add(NewBook::new(*title, *author, *isbn, *copies)) {
            Ok(_) => added += 1,
            Err(DomainError::DuplicateIsbn(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(added)
}
