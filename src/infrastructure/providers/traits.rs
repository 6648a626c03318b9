//! # Lookup Client Port
//!
//! Port definition for single-provider lookups.
//!
//! The race aggregator only talks to providers through [`LookupClient`],
//! which lets tests swap the network for in-process doubles.

use crate::domain::entities::address::NormalizedAddress;
use crate::domain::value_objects::ProviderName;
use crate::infrastructure::providers::error::ProviderError;
use async_trait::async_trait;
use std::fmt;

/// Result of querying one provider.
///
/// The three variants are exhaustive and mutually exclusive for every
/// provider invocation.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// Provider returned a usable address.
    Found(NormalizedAddress),
    /// Provider answered successfully but had nothing for this code.
    NoData,
    /// Provider could not be queried or returned garbage.
    Failed(ProviderError),
}

impl LookupOutcome {
    /// Short label used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NoData => "no_data",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(address) => write!(f, "found({})", address),
            Self::NoData => write!(f, "no_data"),
            Self::Failed(error) => write!(f, "failed({})", error),
        }
    }
}

/// A client able to query one provider URL.
///
/// Implementations must absorb every error into [`LookupOutcome::Failed`];
/// a lookup never fails the caller. They must also tolerate being dropped
/// mid-flight, since the aggregator abandons losing lookups.
#[async_trait]
pub trait LookupClient: Send + Sync + fmt::Debug {
    /// Performs one request against `url` on behalf of `provider`.
    async fn lookup(&self, provider: &ProviderName, url: &str) -> LookupOutcome;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn found_carries_address() {
        let source = ProviderName::new("viacep").unwrap();
        let outcome = LookupOutcome::Found(NormalizedAddress::new("SP", source).unwrap());
        assert_eq!(outcome.kind(), "found");
        assert_eq!(outcome.to_string(), "found(?/SP via viacep)");
    }

    #[test]
    fn no_data_and_failed_labels() {
        assert_eq!(LookupOutcome::NoData.kind(), "no_data");
        assert_eq!(LookupOutcome::NoData.to_string(), "no_data");
        let failed = LookupOutcome::Failed(ProviderError::timeout("slow"));
        assert_eq!(failed.kind(), "failed");
        assert!(failed.to_string().contains("slow"));
    }
}
