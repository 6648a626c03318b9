//! # cep-race
//!
//! Resolves Brazilian postal codes (CEP) by racing several public lookup
//! providers and answering with the first usable address.
//!
//! Every request fans out one lookup per configured provider. Outcomes are
//! observed in completion order; the first payload carrying state
//! information wins and the remaining lookups are abandoned. Provider
//! failures and empty payloads only lose the race. When every provider is
//! exhausted the lookup is reported as not found.
//!
//! ## Layers
//!
//! - [`domain`]: postal codes, addresses, provider specs, payload normalization
//! - [`application`]: the race aggregator and the resolve use case
//! - [`infrastructure`]: HTTP lookup client, provider registry, telemetry
//! - [`api`]: axum REST endpoints and the input gate
//! - [`config`]: layered settings
//!
//! ## Example
//!
//! ```ignore
//! use cep_race::application::services::{RaceAggregator, RaceConfig};
//! use cep_race::domain::value_objects::PostalCode;
//! use cep_race::infrastructure::providers::{HttpClient, HttpLookupClient, ProviderRegistry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ProviderRegistry::with_default_providers()?);
//! let client = Arc::new(HttpLookupClient::new(HttpClient::new(5000)?));
//! let race = RaceAggregator::new(registry, client, RaceConfig::default());
//!
//! let result = race.resolve(&PostalCode::parse("01001000")?).await;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
