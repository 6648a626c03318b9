//! # Infrastructure Layer
//!
//! - [`providers`]: HTTP access to upstream postal lookup services
//! - [`telemetry`]: tracing subscriber setup

pub mod providers;
pub mod telemetry;
