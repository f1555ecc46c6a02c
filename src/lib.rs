pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod shell;

pub use infrastructure::config;
pub use infrastructure::seed;

pub use domain::DomainError;
pub use models::{BookRecord, LateFee, LoanPolicy, LoanStatus, NewBook};
pub use services::Catalog;
