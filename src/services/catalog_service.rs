//! Catalog Service - Pure business logic for the book catalog
//!
//! Owns the book repository and implements add, lookup, listing, search,
//! borrow and return. Callers get snapshots; the stored records are only
//! mutated through these operations.

use chrono::{DateTime, Utc};

use crate::domain::{BookFilter, BookRepository, DomainError};
use crate::infrastructure::InMemoryBookRepository;
use crate::models::{BookRecord, LateFee, LoanPolicy, NewBook};
use crate::services::loan_service;

#[derive(Debug)]
pub struct Catalog<R: BookRepository = InMemoryBookRepository> {
    repo: R,
    policy: LoanPolicy,
}

impl Default for Catalog<InMemoryBookRepository> {
    fn default() -> Self {
        Self::new(InMemoryBookRepository::new(), LoanPolicy::default())
    }
}

impl Catalog<InMemoryBookRepository> {
    /// Empty in-memory catalog using `policy`
    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self::new(InMemoryBookRepository::new(), policy)
    }
}

impl<R: BookRepository> Catalog<R> {
    pub fn new(repo: R, policy: LoanPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Validate and store a new book.
    pub fn add(&mut self, input: NewBook) -> Result<BookRecord, DomainError> {
        let book = input.validate().inspect_err(|e| {
            tracing::warn!("Rejected new book: {}", e);
        })?;

        if self.repo.find_by_isbn(&book.isbn)?.is_some() {
            tracing::warn!("Rejected new book: ISBN {} already exists", book.isbn);
            return Err(DomainError::DuplicateIsbn(book.isbn));
        }

        let book = self.repo.create(book)?;
        tracing::info!(
            "Added book '{}' by {} (ISBN {}, {} copies), catalog holds {} books",
            book.title,
            book.author,
            book.isbn,
            book.available_copies,
            self.repo.count()
        );
        Ok(book)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>, DomainError> {
        self.repo.find_by_isbn(isbn)
    }

    /// All books in insertion order
    pub fn list_all(&self) -> Result<Vec<BookRecord>, DomainError> {
        let books = self.repo.find_all(&BookFilter::default())?;
        tracing::debug!("Listing {} books", books.len());
        Ok(books)
    }

    /// Books whose title or author contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<BookRecord>, DomainError> {
        let books = self.repo.find_all(&BookFilter::query(query))?;
        tracing::debug!("Search {:?} matched {} books", query, books.len());
        Ok(books)
    }

    /// Check out one copy.
    ///
    /// Only one outstanding borrow is tracked per record: borrowing a record
    /// that is already borrowed takes another copy and moves the borrowed
    /// date forward.
    pub fn borrow(
        &mut self,
        isbn: &str,
        borrowed_at: DateTime<Utc>,
    ) -> Result<BookRecord, DomainError> {
        let mut book = self.require(isbn)?;

        if book.available_copies == 0 {
            tracing::warn!("Borrow refused: no copies of ISBN {} available", isbn);
            return Err(DomainError::NoCopiesAvailable(isbn.to_string()));
        }

        book.available_copies -= 1;
        book.is_borrowed = true;
        book.borrowed_date = Some(borrowed_at);

        let book = self.repo.update(book)?;
        tracing::info!(
            "Borrowed '{}' (ISBN {}), {} copies left",
            book.title,
            book.isbn,
            book.available_copies
        );
        Ok(book)
    }

    /// Check a copy back in and compute the late fee from the stored
    /// borrowed date.
    pub fn return_book(
        &mut self,
        isbn: &str,
        returned_at: DateTime<Utc>,
    ) -> Result<LateFee, DomainError> {
        let mut book = self.require(isbn)?;

        let borrowed_at = match (book.is_borrowed, book.borrowed_date) {
            (true, Some(date)) => date,
            _ => {
                tracing::warn!("Return refused: ISBN {} is not borrowed", isbn);
                return Err(DomainError::NotBorrowed(isbn.to_string()));
            }
        };

        let fee = loan_service::calculate_late_fee(&self.policy, borrowed_at, returned_at);

        book.available_copies = book.available_copies.saturating_add(1);
        book.is_borrowed = false;
        book.borrowed_date = None;

        let book = self.repo.update(book)?;
        if fee.is_zero() {
            tracing::info!("Returned '{}' (ISBN {}) on time", book.title, book.isbn);
        } else {
            tracing::info!(
                "Returned '{}' (ISBN {}), {} days overdue, fee {}",
                book.title,
                book.isbn,
                fee.days_overdue,
                fee.amount
            );
        }
        Ok(fee)
    }

    fn require(&self, isbn: &str) -> Result<BookRecord, DomainError> {
        self.repo.find_by_isbn(isbn)?.ok_or_else(|| {
            tracing::warn!("No book with ISBN {}", isbn);
            DomainError::NotFound(isbn.to_string())
        })
    }
}
