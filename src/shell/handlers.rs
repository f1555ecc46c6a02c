//! Form handlers: call the catalog and turn the outcome into the message
//! shown to the user.

use chrono::{DateTime, Utc};

use crate::domain::{BookRepository, DomainError};
use crate::models::{BookRecord, NewBook};
use crate::services::Catalog;

pub const MSG_ADDED: &str = "Book added successfully.";
pub const MSG_INVALID_BOOK: &str =
    "All fields must be filled, and 'Available Copies' must be a valid number.";
pub const MSG_DUPLICATE: &str = "A book with the same ISBN already exists in the library.";
pub const MSG_EMPTY_ISBN: &str = "ISBN field must not be empty.";
pub const MSG_BORROWED: &str = "Book borrowed successfully.";
pub const MSG_CANNOT_BORROW: &str = "Book not found or no available copies.";
pub const MSG_NOT_BORROWED: &str = "You can only return a borrowed book.";
pub const MSG_NOT_FOUND: &str = "Book not found.";
pub const MSG_EMPTY_QUERY: &str = "Search query must not be empty.";
pub const MSG_NO_MATCHES: &str = "No matching books found.";
pub const MSG_GOODBYE: &str = "Exiting Library Management System. Goodbye!";
pub const MSG_INVALID_CHOICE: &str = "Invalid choice. Please select an option from the menu.";

pub fn submit_add_book<R: BookRepository>(catalog: &mut Catalog<R>, input: NewBook) -> String {
    match catalog.add(input) {
        Ok(_) => MSG_ADDED.to_string(),
        Err(DomainError::InvalidInput(_)) => MSG_INVALID_BOOK.to_string(),
        Err(DomainError::DuplicateIsbn(_)) => MSG_DUPLICATE.to_string(),
        Err(e) => unexpected(e),
    }
}

pub fn submit_borrow_book<R: BookRepository>(
    catalog: &mut Catalog<R>,
    isbn: &str,
    now: DateTime<Utc>,
) -> String {
    if isbn.is_empty() {
        return MSG_EMPTY_ISBN.to_string();
    }

    match catalog.borrow(isbn, now) {
        Ok(_) => MSG_BORROWED.to_string(),
        Err(DomainError::NotFound(_) | DomainError::NoCopiesAvailable(_)) => {
            MSG_CANNOT_BORROW.to_string()
        }
        Err(e) => unexpected(e),
    }
}

pub fn submit_return_book<R: BookRepository>(
    catalog: &mut Catalog<R>,
    isbn: &str,
    now: DateTime<Utc>,
    currency: &str,
) -> String {
    match catalog.return_book(isbn, now) {
        Ok(fee) => format!(
            "Late fees for this book: {:.2} {}",
            fee.amount as f64, currency
        ),
        Err(DomainError::NotBorrowed(_)) => MSG_NOT_BORROWED.to_string(),
        Err(DomainError::NotFound(_)) => MSG_NOT_FOUND.to_string(),
        Err(e) => unexpected(e),
    }
}

pub fn list_books<R: BookRepository>(catalog: &Catalog<R>) -> String {
    match catalog.list_all() {
        Ok(books) => render_list("All Books in the Library:", &books),
        Err(e) => unexpected(e),
    }
}

pub fn submit_search_books<R: BookRepository>(catalog: &Catalog<R>, query: &str) -> String {
    if query.is_empty() {
        return MSG_EMPTY_QUERY.to_string();
    }

    match catalog.search(query) {
        Ok(books) if books.is_empty() => MSG_NO_MATCHES.to_string(),
        Ok(books) => render_list("Matching Books:", &books),
        Err(e) => unexpected(e),
    }
}

/// Whole catalog as pretty-printed JSON
pub fn export_catalog<R: BookRepository>(catalog: &Catalog<R>) -> String {
    let books = match catalog.list_all() {
        Ok(books) => books,
        Err(e) => return unexpected(e),
    };

    serde_json::to_string_pretty(&books).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize catalog: {}", e);
        format!("Export failed: {}", e)
    })
}

pub fn render_book(book: &BookRecord) -> String {
    format!(
        "Title: {}, Author: {}, ISBN: {}, Available Copies: {}",
        book.title, book.author, book.isbn, book.available_copies
    )
}

fn render_list(header: &str, books: &[BookRecord]) -> String {
    let mut out = String::from(header);
    for book in books {
        out.push('\n');
        out.push_str(&render_book(book));
    }
    out
}

fn unexpected(e: DomainError) -> String {
    tracing::error!("Unexpected catalog error: {}", e);
    format!("Error: {}", e)
}
