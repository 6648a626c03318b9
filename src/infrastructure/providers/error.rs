//! # Provider Errors
//!
//! Error types for upstream provider calls.
//!
//! A [`ProviderError`] never reaches the client of this service. The lookup
//! client folds it into a failed outcome, and the only effect is that the
//! provider loses the race.
//!
//! # Examples
//!
//! ```
//! use cep_race::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::timeout("request timed out");
//! assert!(error.is_transport());
//!
//! let error = ProviderError::status(503, "maintenance");
//! assert_eq!(error.status_code(), Some(503));
//! ```

use thiserror::Error;

/// Error type for a single provider call.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Provider answered with a non-success HTTP status.
    #[error("provider returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("provider decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Lookup task did not run to completion.
    #[error("provider internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

/// Maximum number of body bytes kept in a status error.
pub(crate) const MAX_ERROR_BODY_LEN: usize = 256;

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a status error, truncating long bodies.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_ERROR_BODY_LEN {
            let mut cut = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Self::Status { status, body }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the request never produced an HTTP response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns the HTTP status code, if the provider answered.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
