//! # HTTP Client
//!
//! Pooled HTTP client shared by every provider lookup.
//!
//! One [`HttpClient`] is created at startup and cloned into each lookup.
//! Clones share the same connection pool, which is safe for concurrent use
//! across simultaneous requests.
//!
//! # Examples
//!
//! ```ignore
//! use cep_race::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let payload = client.get_json("https://viacep.com.br/ws/01001000/json/").await?;
//! ```

use crate::infrastructure::providers::error::{MAX_ERROR_BODY_LEN, ProviderError, ProviderResult};
use reqwest::{Client, Response};
use std::time::Duration;

/// User agent sent to providers.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for provider lookups.
///
/// Every request is a plain GET with no retry. Any non-2xx status is an
/// error, and a 2xx body must decode as JSON.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified per-request timeout.
    ///
    /// A `timeout_ms` of `0` sends requests without a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build().map_err(|e| {
            ProviderError::internal(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    /// Makes a GET request and decodes the body as arbitrary JSON.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout` or `ProviderError::Connection` if the
    /// request fails, `ProviderError::Status` for a non-success status and
    /// `ProviderError::Decode` if the body is not JSON.
    pub async fn get_json(&self, url: &str) -> ProviderResult<serde_json::Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the status and decodes the JSON body.
async fn handle_response(response: Response) -> ProviderResult<serde_json::Value> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::decode(format!("failed to parse response: {}", e)))
    } else {
        let body = read_prefix(response, MAX_ERROR_BODY_LEN).await;
        Err(ProviderError::status(status.as_u16(), body))
    }
}

/// Reads at most `limit` bytes of the body and drops the rest.
async fn read_prefix(mut response: Response, limit: usize) -> String {
    let mut prefix = Vec::with_capacity(limit);
    while prefix.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => prefix.extend_from_slice(&chunk),
            Ok(None) | Err(_) => break,
        }
    }
    prefix.truncate(limit);
    String::from_utf8_lossy(&prefix).into_owned()
}

/// Maps a reqwest error to a ProviderError.
fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout("request timed out")
    } else if error.is_connect() {
        ProviderError::connection(format!("connection failed: {}", error))
    } else {
        ProviderError::connection(format!("HTTP request failed: {}", error))
    }
}
