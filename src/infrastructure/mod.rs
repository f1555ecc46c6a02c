//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Demo data (seed)

pub mod config;
pub mod repositories;
pub mod seed;

pub use repositories::*;
