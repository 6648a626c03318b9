//! # API Layer
//!
//! Inbound interfaces.
//!
//! - [`rest`]: axum HTTP endpoints

pub mod rest;
