//! # Postal Code
//!
//! Validated Brazilian postal code (CEP).
//!
//! A [`PostalCode`] can only be built through [`PostalCode::parse`], so any
//! value of this type has already passed the input gate and may be handed to
//! the race aggregator.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::value_objects::postal_code::PostalCode;
//!
//! let cep = PostalCode::parse("01001000").unwrap();
//! assert_eq!(cep.as_str(), "01001000");
//!
//! assert!(PostalCode::parse("0100100").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact number of characters a postal code must have.
pub const POSTAL_CODE_LENGTH: usize = 8;

/// A postal code that passed length validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Validates and wraps a raw postal code.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if the input is not exactly
    /// [`POSTAL_CODE_LENGTH`] characters long.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let length = raw.chars().count();
        if length != POSTAL_CODE_LENGTH {
            return Err(DomainError::invalid_postal_code(length));
        }
        Ok(Self(raw))
    }

    /// Returns the postal code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}
