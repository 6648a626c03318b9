//! # Domain Entities
//!
//! - [`NormalizedAddress`]: canonical address record
//! - [`ProviderSpec`]: provider name and endpoint template
//! - [`ProviderTarget`]: provider template resolved for one postal code

pub mod address;
pub mod provider;

pub use address::NormalizedAddress;
pub use provider::{POSTAL_CODE_PLACEHOLDER, ProviderSpec, ProviderTarget};
