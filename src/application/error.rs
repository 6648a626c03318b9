//! # Application Errors
//!
//! Errors surfaced to callers of the application layer.
//!
//! Provider-level failures are absorbed by the race and never appear here.
//! Only input validation and full provider exhaustion are user-visible, plus
//! configuration problems detected at startup.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(DomainError)   - Malformed postal code, rejected before any lookup
//! ├── NotFound { postal_code }  - Every provider failed or had no data
//! └── Configuration(String)     - Invalid settings or provider registry
//! ```
//!
//! # Examples
//!
//! ```
//! use cep_race::application::error::ApplicationError;
//! use cep_race::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::invalid_postal_code(3).into();
//! assert!(matches!(err, ApplicationError::Validation(_)));
//!
//! let err = ApplicationError::not_found("01001000");
//! assert_eq!(err.to_string(), "not found: no provider returned data for postal code 01001000");
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::providers::error::ProviderError;
use crate::infrastructure::providers::registry::RegistryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// No provider returned usable data.
    #[error("not found: no provider returned data for postal code {postal_code}")]
    NotFound {
        /// Postal code that was looked up.
        postal_code: String,
    },

    /// Settings or provider registry are invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(postal_code: impl Into<String>) -> Self {
        Self::NotFound {
            postal_code: postal_code.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<RegistryError> for ApplicationError {
    fn from(error: RegistryError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl From<ProviderError> for ApplicationError {
    fn from(error: ProviderError) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
