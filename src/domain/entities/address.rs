//! # Normalized Address
//!
//! Canonical address record produced from any provider payload.
//!
//! The record always carries a non-empty state. Absence of state means the
//! provider had no usable data, which is represented by the absence of a
//! [`NormalizedAddress`] rather than by a record with an empty field.
//!
//! On the wire the record uses the Portuguese field names served to clients:
//! `cidade`, `estado`, `bairro`, `logradouro` and `source`.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::entities::address::NormalizedAddress;
//! use cep_race::domain::value_objects::ProviderName;
//!
//! let source = ProviderName::new("viacep").unwrap();
//! let address = NormalizedAddress::new("SP", source)
//!     .unwrap()
//!     .with_city("São Paulo");
//!
//! assert_eq!(address.state(), "SP");
//! assert_eq!(address.city(), Some("São Paulo"));
//!
//! let source = ProviderName::new("viacep").unwrap();
//! assert!(NormalizedAddress::new("", source).is_none());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ProviderName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressWire", into = "AddressWire")]
pub struct NormalizedAddress {
    city: Option<String>,
    state: String,
    neighborhood: Option<String>,
    street: Option<String>,
    source: ProviderName,
}

impl NormalizedAddress {
    /// Creates an address with only state and source populated.
    ///
    /// Returns `None` when `state` is empty or whitespace, since such a
    /// record carries no evidence that the postal code exists.
    #[must_use]
    pub fn new(state: impl Into<String>, source: ProviderName) -> Option<Self> {
        let state = state.into();
        if state.trim().is_empty() {
            return None;
        }
        Some(Self {
            city: None,
            state,
            neighborhood: None,
            street: None,
            source,
        })
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the neighborhood.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    /// Sets the street.
    #[must_use]
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Returns the city, if known.
    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the state. Never empty.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the neighborhood, if known.
    #[inline]
    #[must_use]
    pub fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }

    /// Returns the street, if known.
    #[inline]
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Returns the provider that supplied this record.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &ProviderName {
        &self.source
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} via {}",
            self.city.as_deref().unwrap_or("?"),
            self.state,
            self.source
        )
    }
}

/// Wire representation served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddressWire {
    #[serde(default)]
    cidade: Option<String>,
    #[serde(default)]
    estado: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    logradouro: Option<String>,
    source: ProviderName,
}

impl TryFrom<AddressWire> for NormalizedAddress {
    type Error = DomainError;

    fn try_from(wire: AddressWire) -> Result<Self, Self::Error> {
        let state = wire.estado.ok_or(DomainError::MissingState)?;
        let mut address = Self::new(state, wire.source).ok_or(DomainError::MissingState)?;
        address.city = wire.cidade;
        address.neighborhood = wire.bairro;
        address.street = wire.logradouro;
        Ok(address)
    }
}

impl From<NormalizedAddress> for AddressWire {
    fn from(address: NormalizedAddress) -> Self {
        Self {
            cidade: address.city,
            estado: Some(address.state),
            bairro: address.neighborhood,
            logradouro: address.street,
            source: address.source,
        }
    }
}
