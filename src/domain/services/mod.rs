//! # Domain Services
//!
//! - [`normalizer`]: maps provider payloads onto the canonical address

pub mod normalizer;

pub use normalizer::normalize;
