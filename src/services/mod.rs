//! Services Layer
//!
//! This module contains pure business logic, independent of the shell.

pub mod catalog_service;
pub mod loan_service;

// Re-export for convenience
pub use catalog_service::Catalog;
pub use loan_service::{calculate_late_fee, due_date};
