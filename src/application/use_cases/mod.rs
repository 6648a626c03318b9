//! # Use Cases

pub mod resolve_address;

pub use resolve_address::ResolveAddressUseCase;
