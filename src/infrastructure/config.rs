use std::env;
use std::str::FromStr;

use crate::models::LoanPolicy;
use crate::models::loan::{DEFAULT_LATE_FEE_PER_DAY, DEFAULT_LOAN_PERIOD_DAYS};

#[derive(Clone, Debug)]
pub struct Config {
    pub profile: String,
    pub loan_policy: LoanPolicy,
    pub currency: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        Self {
            profile,
            loan_policy: LoanPolicy {
                loan_period_days: parse_or("LOAN_PERIOD_DAYS", DEFAULT_LOAN_PERIOD_DAYS),
                late_fee_per_day: parse_or("LATE_FEE_PER_DAY", DEFAULT_LATE_FEE_PER_DAY),
            },
            currency: env::var("CURRENCY")
                .ok()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "rupees".to_string()),
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            loan_policy: LoanPolicy::default(),
            currency: "rupees".to_string(),
            seed_demo: false,
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
