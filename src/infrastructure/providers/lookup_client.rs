//! # HTTP Lookup Client
//!
//! [`LookupClient`] implementation backed by [`HttpClient`].
//!
//! Each call is timed and logged once on completion with the provider name
//! and the elapsed seconds, whatever the outcome.

use crate::domain::services::normalizer::normalize;
use crate::domain::value_objects::ProviderName;
use crate::infrastructure::providers::error::ProviderError;
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::{LookupClient, LookupOutcome};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Lookup client issuing real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    http: HttpClient,
}

impl HttpLookupClient {
    /// Creates a lookup client over a shared HTTP client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    async fn fetch(&self, provider: &ProviderName, url: &str) -> LookupOutcome {
        let payload = match self.http.get_json(url).await {
            Ok(payload) => payload,
            Err(error) => return LookupOutcome::Failed(error),
        };

        let Value::Object(fields) = payload else {
            return LookupOutcome::Failed(ProviderError::decode("expected a JSON object"));
        };

        match normalize(&fields, provider) {
            Some(address) => LookupOutcome::Found(address),
            None => LookupOutcome::NoData,
        }
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn lookup(&self, provider: &ProviderName, url: &str) -> LookupOutcome {
        let start = Instant::now();
        let outcome = self.fetch(provider, url).await;
        let elapsed = format!("{:.3}", start.elapsed().as_secs_f64());

        info!(
            provider = %provider,
            elapsed = %elapsed,
            outcome = outcome.kind(),
            "{} took {}s",
            provider,
            elapsed
        );
        if let LookupOutcome::Failed(error) = &outcome {
            debug!(
                provider = %provider,
                error = %error,
                transport = error.is_transport(),
                status = error.status_code(),
                "provider lookup failed"
            );
        }

        outcome
    }
}
