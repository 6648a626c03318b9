//! # Response Normalizer
//!
//! Maps provider payloads onto [`NormalizedAddress`].
//!
//! Providers name the same concept differently (`localidade` vs `cidade`,
//! `uf` vs `estado`). Each canonical field has an ordered list of candidate
//! keys and takes the first one that holds a non-blank string. Values that are
//! `null`, blank or not strings count as absent, so a provider reporting
//! `"uf": ""` is indistinguishable from one that omits the key.
//!
//! A payload without state yields `None`: every existing postal code has at
//! least state-level information.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::services::normalizer::normalize;
//! use cep_race::domain::value_objects::ProviderName;
//! use serde_json::json;
//!
//! let viacep = ProviderName::new("viacep").unwrap();
//! let payload = json!({"localidade": "São Paulo", "uf": "SP"});
//! let address = normalize(payload.as_object().unwrap(), &viacep).unwrap();
//! assert_eq!(address.city(), Some("São Paulo"));
//! assert_eq!(address.state(), "SP");
//!
//! let empty = json!({"uf": ""});
//! assert!(normalize(empty.as_object().unwrap(), &viacep).is_none());
//! ```

use crate::domain::entities::address::NormalizedAddress;
use crate::domain::value_objects::ProviderName;
use serde_json::{Map, Value};

/// Candidate keys for the city, in priority order.
pub const CITY_KEYS: &[&str] = &["localidade", "cidade"];

/// Candidate keys for the state, in priority order.
pub const STATE_KEYS: &[&str] = &["estado", "uf"];

/// Candidate keys for the neighborhood.
pub const NEIGHBORHOOD_KEYS: &[&str] = &["bairro"];

/// Candidate keys for the street.
pub const STREET_KEYS: &[&str] = &["logradouro"];

/// Normalizes a decoded provider payload.
///
/// `source` always comes from `provider`; a `source` key inside the payload
/// is ignored. Returns `None` when the payload has no usable state.
#[must_use]
pub fn normalize(payload: &Map<String, Value>, provider: &ProviderName) -> Option<NormalizedAddress> {
    let state = first_present(payload, STATE_KEYS)?;
    let mut address = NormalizedAddress::new(state, provider.clone())?;

    if let Some(city) = first_present(payload, CITY_KEYS) {
        address = address.with_city(city);
    }
    if let Some(neighborhood) = first_present(payload, NEIGHBORHOOD_KEYS) {
        address = address.with_neighborhood(neighborhood);
    }
    if let Some(street) = first_present(payload, STREET_KEYS) {
        address = address.with_street(street);
    }

    Some(address)
}

/// Returns the first candidate key holding a non-blank string, as sent.
fn first_present<'a>(payload: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        payload
            .get(*key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    })
}
