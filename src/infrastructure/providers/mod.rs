//! # Providers
//!
//! Upstream postal lookup services.
//!
//! ## Port
//!
//! - [`LookupClient`]: single-provider lookup returning a [`LookupOutcome`]
//!
//! ## Implementations
//!
//! - [`HttpLookupClient`]: reqwest-backed lookup with normalization and timing
//!
//! ## Support
//!
//! - [`ProviderRegistry`]: configured providers and their endpoint templates
//! - [`HttpClient`]: pooled HTTP client
//! - [`ProviderError`]: failures absorbed into [`LookupOutcome::Failed`]

pub mod error;
pub mod http_client;
pub mod lookup_client;
pub mod registry;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use lookup_client::HttpLookupClient;
pub use registry::{DEFAULT_PROVIDERS, ProviderRegistry, RegistryError};
pub use traits::{LookupClient, LookupOutcome};
