//! Loan Service - late fee calculation

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{LateFee, LoanPolicy};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Due date of a loan started at `borrowed_at`.
pub fn due_date(policy: &LoanPolicy, borrowed_at: DateTime<Utc>) -> DateTime<Utc> {
    borrowed_at
        .checked_add_signed(TimeDelta::days(i64::from(policy.loan_period_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Fee owed when returning at `returned_at` a book borrowed at `borrowed_at`.
///
/// Only whole days past the due date are charged; partial days are dropped.
pub fn calculate_late_fee(
    policy: &LoanPolicy,
    borrowed_at: DateTime<Utc>,
    returned_at: DateTime<Utc>,
) -> LateFee {
    let due = due_date(policy, borrowed_at);
    if returned_at <= due {
        return LateFee::default();
    }

    let overdue_ms = (returned_at - due).num_milliseconds();
    let days_overdue = (overdue_ms / MILLIS_PER_DAY) as u64;

    LateFee {
        days_overdue,
        amount: days_overdue.saturating_mul(policy.late_fee_per_day),
    }
}
