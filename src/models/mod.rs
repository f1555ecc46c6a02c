pub mod book;
pub mod loan;

pub use book::{BookRecord, NewBook};
pub use loan::{LateFee, LoanPolicy, LoanStatus};
