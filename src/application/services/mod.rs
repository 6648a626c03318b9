//! # Application Services
//!
//! - [`RaceAggregator`]: concurrent provider race with first-valid-wins semantics

pub mod race;

pub use race::{RaceAggregator, RaceConfig, RaceResult};
