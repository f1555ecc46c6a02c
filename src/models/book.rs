use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::DomainError;
use crate::models::loan::LoanStatus;

/// A catalogued title and its loan state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available_copies: u32,
    pub is_borrowed: bool,
    /// Set iff `is_borrowed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrowed_date: Option<DateTime<Utc>>,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available_copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available_copies,
            is_borrowed: false,
            borrowed_date: None,
        }
    }

    pub fn status(&self) -> LoanStatus {
        match (self.is_borrowed, self.borrowed_date) {
            (true, Some(since)) => LoanStatus::Borrowed { since },
            _ => LoanStatus::Available,
        }
    }

    /// Case-insensitive substring match against title or author.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.author.to_lowercase().contains(&query)
    }
}

/// Raw values of the "Add a Book" form.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available_copies: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available_copies: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available_copies: available_copies.into(),
        }
    }

    /// Check required fields and parse the copy count.
    ///
    /// The ISBN is an opaque key and is stored exactly as given.
    pub fn validate(&self) -> Result<BookRecord, DomainError> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;
        required("isbn", &self.isbn)?;
        let isbn = self.isbn.clone();
        let copies = required("available copies", &self.available_copies)?;

        let available_copies = copies.parse::<u32>().map_err(|_| {
            DomainError::InvalidInput(format!(
                "available copies must be a non-negative integer, got '{}'",
                copies
            ))
        })?;

        Ok(BookRecord::new(title, author, isbn, available_copies))
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_and_parses() {
        let book = NewBook::new(" Dune ", "Frank Herbert", "978-0441013593", " 3 ")
            .validate()
            .unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.available_copies, 3);
        assert!(!book.is_borrowed);
        assert!(book.borrowed_date.is_none());
    }

    #[test]
    fn test_validate_keeps_isbn_verbatim() {
        let book = NewBook::new("Dune", "Frank Herbert", " 42 ", "1")
            .validate()
            .unwrap();
        assert_eq!(book.isbn, " 42 ");

        let err = NewBook::new("Dune", "Frank Herbert", "   ", "1")
            .validate()
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("isbn is required".into()));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let err = NewBook::new("Dune", "   ", "978-0441013593", "3")
            .validate()
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("author is required".into()));

        assert!(NewBook::new("", "Frank Herbert", "1", "3").validate().is_err());
        assert!(NewBook::new("Dune", "Frank Herbert", "", "3").validate().is_err());
        assert!(NewBook::new("Dune", "Frank Herbert", "1", "").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_copy_counts() {
        for copies in ["-1", "three", "2.5", "99999999999"] {
            let result = NewBook::new("Dune", "Frank Herbert", "1", copies).validate();
            assert!(
                matches!(result, Err(DomainError::InvalidInput(_))),
                "copies={copies}"
            );
        }
        assert!(NewBook::new("Dune", "Frank Herbert", "1", "0").validate().is_ok());
    }

    #[test]
    fn test_matches_title_or_author() {
        let book = BookRecord::new("The Hobbit", "J.R.R. Tolkien", "1", 1);
        assert!(book.matches("hobbit"));
        assert!(book.matches("TOLKIEN"));
        assert!(book.matches("hob"));
        assert!(!book.matches("asimov"));
    }
}
