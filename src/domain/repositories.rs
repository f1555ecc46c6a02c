//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use super::DomainError;
use crate::models::BookRecord;

/// Filter criteria for book queries
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    /// Case-insensitive substring matched against title or author
    pub query: Option<String>,
}

impl BookFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// Repository trait for BookRecord entity
pub trait BookRepository {
    /// Find all books matching the filter, in insertion order
    fn find_all(&self, filter: &BookFilter) -> Result<Vec<BookRecord>, DomainError>;

    /// Find a single book by exact ISBN
    fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>, DomainError>;

    /// Store a new book; fails if the ISBN is taken
    fn create(&mut self, book: BookRecord) -> Result<BookRecord, DomainError>;

    /// Replace the stored record carrying the same ISBN
    fn update(&mut self, book: BookRecord) -> Result<BookRecord, DomainError>;

    /// Number of stored records
    fn count(&self) -> usize;
}
