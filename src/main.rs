//! `cep-race` server binary.

use anyhow::Context;
use cep_race::api::rest::{AppState, create_router};
use cep_race::application::services::RaceAggregator;
use cep_race::application::use_cases::ResolveAddressUseCase;
use cep_race::config::AppConfig;
use cep_race::infrastructure::providers::HttpLookupClient;
use cep_race::infrastructure::telemetry::init_tracing;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve Brazilian postal codes by racing public lookup providers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging)?;

    let registry = Arc::new(config.provider_registry()?);
    let client = Arc::new(HttpLookupClient::new(config.http_client()?));
    let aggregator = Arc::new(RaceAggregator::new(registry, client, config.race_config()));

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        %addr,
        providers = ?aggregator
            .registry()
            .providers()
            .iter()
            .map(|p| p.name().as_str())
            .collect::<Vec<_>>(),
        timeout_ms = aggregator.config().timeout_ms,
        provider_timeout_ms = config.race.provider_timeout_ms,
        "listening"
    );

    let state = Arc::new(AppState::new(ResolveAddressUseCase::new(aggregator)));

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
