//! # Application Layer
//!
//! Orchestrates providers to answer lookups.
//!
//! - [`services`]: the provider race
//! - [`use_cases`]: request-level operations
//! - [`error`]: user-visible errors

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
