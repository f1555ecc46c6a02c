//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Every failing catalog operation leaves the catalog untouched.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed input field, with message
    InvalidInput(String),
    /// A record with this ISBN is already catalogued
    DuplicateIsbn(String),
    /// No record with this ISBN
    NotFound(String),
    /// Borrow attempted while no copy is on the shelf
    NoCopiesAvailable(String),
    /// Return attempted on a record that is not borrowed
    NotBorrowed(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::DuplicateIsbn(isbn) => write!(f, "Duplicate ISBN: {}", isbn),
            DomainError::NotFound(isbn) => write!(f, "Book not found: {}", isbn),
            DomainError::NoCopiesAvailable(isbn) => {
                write!(f, "No copies available for ISBN {}", isbn)
            }
            DomainError::NotBorrowed(isbn) => write!(f, "Book is not borrowed: {}", isbn),
        }
    }
}

impl std::error::Error for DomainError {}
