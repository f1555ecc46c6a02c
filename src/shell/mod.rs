//! Terminal presentation shell
//!
//! Menu-driven front end over a [`Catalog`]: prompts for form fields,
//! calls the catalog and prints the resulting message.

pub mod handlers;
pub mod menu;

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::BookRepository;
use crate::infrastructure::InMemoryBookRepository;
use crate::infrastructure::config::Config;
use crate::services::Catalog;

pub use menu::run;

/// Source of "now" for borrow and return timestamps
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    ListBooks,
    SearchBooks,
    Export,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBook,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::ListBooks,
        MenuChoice::SearchBooks,
        MenuChoice::Export,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::ListBooks => "Display All Books",
            MenuChoice::SearchBooks => "Search Books",
            MenuChoice::Export => "Export Catalog (JSON)",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddBook),
            "2" => Ok(MenuChoice::BorrowBook),
            "3" => Ok(MenuChoice::ReturnBook),
            "4" => Ok(MenuChoice::ListBooks),
            "5" => Ok(MenuChoice::SearchBooks),
            "6" => Ok(MenuChoice::Export),
            "7" | "q" | "quit" => Ok(MenuChoice::Quit),
            _ => Err(()),
        }
    }
}

/// Shell state: the catalog it drives plus display settings
pub struct Shell<R: BookRepository = InMemoryBookRepository> {
    pub catalog: Catalog<R>,
    currency: String,
    clock: Clock,
}

impl Shell<InMemoryBookRepository> {
    /// Empty catalog configured from `config`, using the system clock
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Catalog::with_policy(config.loan_policy),
            config.currency.clone(),
            Box::new(Utc::now),
        )
    }
}

impl<R: BookRepository> Shell<R> {
    pub fn new(catalog: Catalog<R>, currency: impl Into<String>, clock: Clock) -> Self {
        Self {
            catalog,
            currency: currency.into(),
            clock,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(" 1 ".parse::<MenuChoice>(), Ok(MenuChoice::AddBook));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Export));
        assert_eq!("q".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert_eq!("8".parse::<MenuChoice>(), Err(()));
        assert_eq!("".parse::<MenuChoice>(), Err(()));
    }
}
