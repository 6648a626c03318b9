//! # Domain Errors
//!
//! Error types raised when domain invariants are violated.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_postal_code(5);
//! assert_eq!(err.to_string(), "cep length should be exactly 8, given 5");
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Postal code does not have the required length.
    #[error("cep length should be exactly 8, given {length}")]
    InvalidPostalCode {
        /// Number of characters received.
        length: usize,
    },

    /// Provider name is empty or contains unsupported characters.
    #[error("invalid provider name: {0:?}")]
    InvalidProviderName(String),

    /// Address record without state information.
    #[error("address is missing state information")]
    MissingState,

    /// Endpoint template cannot produce a usable request URL.
    #[error("invalid endpoint template for provider {provider}: {reason}")]
    InvalidEndpointTemplate {
        /// Provider the template belongs to.
        provider: String,
        /// Why the template was rejected.
        reason: String,
    },
}

impl DomainError {
    /// Creates an invalid postal code error.
    #[must_use]
    pub fn invalid_postal_code(length: usize) -> Self {
        Self::InvalidPostalCode { length }
    }

    /// Creates an invalid provider name error.
    #[must_use]
    pub fn invalid_provider_name(name: impl Into<String>) -> Self {
        Self::InvalidProviderName(name.into())
    }

    /// Creates an invalid endpoint template error.
    #[must_use]
    pub fn invalid_endpoint_template(
        provider: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidEndpointTemplate {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error was caused by client input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPostalCode { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postal_code_error_is_client_error() {
        let err = DomainError::invalid_postal_code(9);
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "cep length should be exactly 8, given 9");
    }

    #[test]
    fn template_error_is_not_client_error() {
        let err = DomainError::invalid_endpoint_template("viacep", "missing {cep}");
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("viacep"));
        assert!(err.to_string().contains("missing {cep}"));
    }
}
