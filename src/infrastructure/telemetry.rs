//! # Telemetry
//!
//! Global `tracing` subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured filter directive.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the filter directive is
/// invalid or a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> ApplicationResult<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    installed.map_err(|e| ApplicationError::configuration(format!("tracing init failed: {e}")))
}

fn build_filter(config: &LoggingConfig) -> ApplicationResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            ApplicationError::configuration(format!(
                "invalid log filter {:?}: {}",
                config.filter, e
            ))
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_accepted() {
        let config = LoggingConfig {
            format: LogFormat::Json,
            filter: "cep_race=debug,tower_http=info".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }
}
