use chrono::{DateTime, Utc};

pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
pub const DEFAULT_LATE_FEE_PER_DAY: u64 = 2;

/// Loan state of a record, derived from its borrow flag and date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanStatus {
    Available,
    Borrowed { since: DateTime<Utc> },
}

/// Loan period and penalty applied on return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoanPolicy {
    pub loan_period_days: u32,
    pub late_fee_per_day: u64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            late_fee_per_day: DEFAULT_LATE_FEE_PER_DAY,
        }
    }
}

/// Fee charged on a return, in currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LateFee {
    pub days_overdue: u64,
    pub amount: u64,
}

impl LateFee {
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}
