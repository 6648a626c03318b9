//! # Domain Layer
//!
//! Types and rules that hold regardless of transport or provider.
//!
//! - [`value_objects`]: validated postal codes and provider names
//! - [`entities`]: normalized addresses and provider specs
//! - [`services`]: payload normalization
//! - [`errors`]: domain rule violations

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
