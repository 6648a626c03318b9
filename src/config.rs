//! # Configuration
//!
//! Layered service settings.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults (the three public providers, port 8080).
//! 2. An optional configuration file (TOML, YAML or JSON by extension).
//! 3. Environment variables prefixed with `CEP_RACE`, nested with `__`,
//!    e.g. `CEP_RACE__SERVER__PORT=9000` or `CEP_RACE__RACE__TIMEOUT_MS=3000`.
//!
//! # Examples
//!
//! ```
//! use cep_race::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.providers.len(), 3);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::race::RaceConfig;
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::registry::{DEFAULT_PROVIDERS, ProviderRegistry};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Configuration file read when no path is given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "CEP_RACE";

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Upstream providers raced for every lookup.
    pub providers: Vec<ProviderSettings>,
    /// Race timing.
    pub race: RaceSettings,
    /// Log output.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// One configured provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider name, reported as `source` in responses.
    pub name: String,
    /// Endpoint URL containing a `{cep}` placeholder.
    pub endpoint_template: String,
}

/// Race timing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceSettings {
    /// Overall deadline of one resolution in milliseconds. `0` disables it.
    pub timeout_ms: u64,
    /// Per-provider HTTP timeout in milliseconds. `0` disables it.
    pub provider_timeout_ms: u64,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            provider_timeout_ms: 5_000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            race: RaceSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_providers() -> Vec<ProviderSettings> {
    DEFAULT_PROVIDERS
        .iter()
        .map(|(name, template)| ProviderSettings {
            name: (*name).to_string(),
            endpoint_template: (*template).to_string(),
        })
        .collect()
}

impl AppConfig {
    /// Loads configuration from defaults, an optional file and the environment.
    ///
    /// When `path` is `None`, [`DEFAULT_CONFIG_PATH`] is read if it exists.
    /// An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or the merged settings do not deserialize.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false),
        };

        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    /// Builds configuration from arbitrary sources layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the sources cannot be
    /// merged or deserialized.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> ApplicationResult<Self> {
        builder
            .build()
            .and_then(|merged| merged.try_deserialize::<Self>())
            .map_err(|e| ApplicationError::configuration(e.to_string()))
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if host and port do not form
    /// a valid socket address.
    pub fn listen_addr(&self) -> ApplicationResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ApplicationError::configuration(format!(
                    "invalid listen address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }

    /// Builds the provider registry.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if any provider is invalid.
    pub fn provider_registry(&self) -> ApplicationResult<ProviderRegistry> {
        let pairs = self
            .providers
            .iter()
            .map(|p| (p.name.as_str(), p.endpoint_template.as_str()));
        Ok(ProviderRegistry::from_pairs(pairs)?)
    }

    /// Builds the pooled HTTP client used for provider lookups.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the client cannot be built.
    pub fn http_client(&self) -> ApplicationResult<HttpClient> {
        Ok(HttpClient::new(self.race.provider_timeout_ms)?)
    }

    /// Returns the race configuration.
    #[must_use]
    pub fn race_config(&self) -> RaceConfig {
        RaceConfig::with_timeout(self.race.timeout_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn from_toml(toml: &str) -> ApplicationResult<AppConfig> {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.race.timeout_ms, 10_000);
        assert_eq!(config.race.provider_timeout_ms, 5_000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.providers, default_providers());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
[server]
port = 9000

[race]
timeout_ms = 0

[logging]
format = "json"

[[providers]]
name = "viacep"
endpoint_template = "https://viacep.com.br/ws/{cep}/json/"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.race.timeout_ms, 0);
        assert_eq!(config.race.provider_timeout_ms, 5_000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.providers.len(), 1);
        assert_eq!(config.race_config().deadline(), None);
    }

    #[tokio::test]
    async fn zero_provider_timeout_does_not_fail_lookups() {
        let config = from_toml("[race]\nprovider_timeout_ms = 0").unwrap();
        assert_eq!(config.race.provider_timeout_ms, 0);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"uf": "SP"}))
                    .set_delay(Duration::from_millis(50)),
            )
            .mount(&server)
            .await;

        let client = config.http_client().unwrap();
        let body = client.get_json(&server.uri()).await.unwrap();
        assert_eq!(body["uf"], "SP");
    }

    #[test]
    fn default_registry_builds() {
        let registry = AppConfig::default().provider_registry().unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn explicit_empty_provider_list_is_rejected() {
        let config = from_toml("providers = []").unwrap();
        assert!(config.provider_registry().is_err());
    }

    #[test]
    fn invalid_provider_is_configuration_error() {
        let config = from_toml(
            r#"
[[providers]]
name = "broken"
endpoint_template = "https://example.com/"
"#,
        )
        .unwrap();
        let err = config.provider_registry().unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn listen_addr_parses() {
        let config = from_toml("[server]\nhost = \"127.0.0.1\"\nport = 3000").unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = from_toml("[server]\nhost = \"not a host\"").unwrap();
        assert!(bad.listen_addr().is_err());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/cep-race.toml"))).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
