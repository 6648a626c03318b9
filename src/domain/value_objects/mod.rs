//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`PostalCode`]: 8-character postal code accepted by the input gate
//! - [`ProviderName`]: identity of an upstream provider

pub mod postal_code;
pub mod provider_name;

pub use postal_code::{POSTAL_CODE_LENGTH, PostalCode};
pub use provider_name::ProviderName;
