//! # Provider Name
//!
//! Identity of an upstream postal lookup provider.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name identifying one upstream provider (e.g. `viacep`).
///
/// Names are non-empty and limited to ASCII alphanumerics, `-` and `_`, so
/// they are safe to use as log fields and as the `source` of an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderName(String);

impl ProviderName {
    /// Creates a provider name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProviderName` if the name is empty or
    /// contains characters other than ASCII alphanumerics, `-` or `_`.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DomainError::invalid_provider_name(name));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProviderName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderName> for String {
    fn from(name: ProviderName) -> Self {
        name.0
    }
}
