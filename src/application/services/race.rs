//! # Race Aggregator
//!
//! Resolves a postal code by racing every registered provider.
//!
//! This module provides the [`RaceAggregator`] which launches one lookup per
//! provider concurrently, observes outcomes in completion order and returns
//! the first address found. Remaining lookups are aborted as soon as a winner
//! is known, so a losing provider's result is never observed.
//!
//! Each call to [`RaceAggregator::resolve`] owns its own task set; nothing is
//! shared between concurrent resolutions except the pooled lookup client.

use crate::domain::entities::address::NormalizedAddress;
use crate::domain::value_objects::{PostalCode, ProviderName};
use crate::infrastructure::providers::registry::ProviderRegistry;
use crate::infrastructure::providers::traits::{LookupClient, LookupOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::timeout;

/// Configuration for a race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceConfig {
    /// Overall deadline for one resolution in milliseconds. `0` disables it.
    pub timeout_ms: u64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

impl RaceConfig {
    /// Creates a configuration with the given overall deadline.
    #[must_use]
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    /// Creates a configuration that waits until every provider answered.
    #[must_use]
    pub fn without_timeout() -> Self {
        Self { timeout_ms: 0 }
    }

    /// Returns the overall deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Final answer of a race: exactly one winner or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceResult {
    /// First usable address observed.
    Success(NormalizedAddress),
    /// Every provider failed or had no data, or the deadline expired.
    NotFound,
}

impl RaceResult {
    /// Returns the winning address, if any.
    #[must_use]
    pub fn into_address(self) -> Option<NormalizedAddress> {
        match self {
            Self::Success(address) => Some(address),
            Self::NotFound => None,
        }
    }
}

/// Races all registered providers for a postal code.
#[derive(Debug, Clone)]
pub struct RaceAggregator {
    registry: Arc<ProviderRegistry>,
    client: Arc<dyn LookupClient>,
    config: RaceConfig,
}

impl RaceAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub fn new(
        registry: Arc<ProviderRegistry>,
        client: Arc<dyn LookupClient>,
        config: RaceConfig,
    ) -> Self {
        Self {
            registry,
            client,
            config,
        }
    }

    /// Resolves `code` to the first usable address any provider returns.
    ///
    /// Provider failures never fail the call; they only lose the race.
    /// Returns [`RaceResult::NotFound`] once every provider has been
    /// consumed without a winner, or when the overall deadline expires.
    pub async fn resolve(&self, code: &PostalCode) -> RaceResult {
        let mut lookups = JoinSet::new();
        for target in self.registry.targets(code) {
            let client = Arc::clone(&self.client);
            lookups.spawn(async move {
                let outcome = client.lookup(target.name(), target.url()).await;
                (target.name().clone(), outcome)
            });
        }
        let launched = lookups.len();

        let winner = match self.config.deadline() {
            Some(deadline) => {
                let raced = timeout(deadline, first_found(&mut lookups)).await;
                raced.unwrap_or_else(|_| {
                    tracing::warn!(
                        postal_code = %code,
                        timeout_ms = self.config.timeout_ms,
                        pending = lookups.len(),
                        "race deadline expired"
                    );
                    None
                })
            }
            None => first_found(&mut lookups).await,
        };

        // Losers are abandoned here; nothing they produce is observed.
        lookups.abort_all();

        match winner {
            Some(address) => {
                tracing::info!(
                    postal_code = %code,
                    source = %address.source(),
                    "postal code resolved"
                );
                RaceResult::Success(address)
            }
            None => {
                tracing::warn!(
                    postal_code = %code,
                    providers = launched,
                    "no provider returned usable data"
                );
                RaceResult::NotFound
            }
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Returns the provider registry.
    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }
}

/// Consumes lookups in completion order until one finds an address.
async fn first_found(
    lookups: &mut JoinSet<(ProviderName, LookupOutcome)>,
) -> Option<NormalizedAddress> {
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((_, LookupOutcome::Found(address))) => return Some(address),
            Ok((provider, outcome)) => {
                tracing::debug!(provider = %provider, outcome = %outcome, "discarding outcome");
            }
            Err(e) => {
                tracing::warn!(error = %e, "lookup task did not complete");
            }
        }
    }
    None
}
