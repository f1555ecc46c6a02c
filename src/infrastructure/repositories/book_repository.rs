//! In-memory implementation of BookRepository

use crate::domain::{BookFilter, BookRepository, DomainError};
use crate::models::BookRecord;

/// Vec-backed BookRepository, keeps insertion order
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookRepository {
    books: Vec<BookRecord>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn == isbn)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_all(&self, filter: &BookFilter) -> Result<Vec<BookRecord>, DomainError> {
        let books = match &filter.query {
            Some(q) => self.books.iter().filter(|b| b.matches(q)).cloned().collect(),
            None => self.books.clone(),
        };
        Ok(books)
    }

    fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>, DomainError> {
        Ok(self.books.iter().find(|b| b.isbn == isbn).cloned())
    }

    fn create(&mut self, book: BookRecord) -> Result<BookRecord, DomainError> {
        if self.position(&book.isbn).is_some() {
            return Err(DomainError::DuplicateIsbn(book.isbn));
        }
        self.books.push(book.clone());
        Ok(book)
    }

    fn update(&mut self, book: BookRecord) -> Result<BookRecord, DomainError> {
        let idx = self
            .position(&book.isbn)
            .ok_or_else(|| DomainError::NotFound(book.isbn.clone()))?;
        if let Some(slot) = self.books.get_mut(idx) {
            *slot = book.clone();
        }
        Ok(book)
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}
