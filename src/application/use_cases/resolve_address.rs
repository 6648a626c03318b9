//! # Resolve Address Use Case
//!
//! Turns a validated postal code into an address or a not found error.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::race::RaceAggregator;
use crate::domain::entities::address::NormalizedAddress;
use crate::domain::value_objects::PostalCode;
use std::sync::Arc;

/// Use case for resolving a postal code.
#[derive(Debug, Clone)]
pub struct ResolveAddressUseCase {
    aggregator: Arc<RaceAggregator>,
}

impl ResolveAddressUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(aggregator: Arc<RaceAggregator>) -> Self {
        Self { aggregator }
    }

    /// Resolves `code` by racing every provider.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no provider returned data.
    pub async fn execute(&self, code: &PostalCode) -> ApplicationResult<NormalizedAddress> {
        self.aggregator
            .resolve(code)
            .await
            .into_address()
            .ok_or_else(|| ApplicationError::not_found(code.as_str()))
    }
}
