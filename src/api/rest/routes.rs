//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{AppState, health, resolve_postal_code};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the axum router.
///
/// `/health` is a static route and takes priority over `/{cep}`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/{cep}", get(resolve_postal_code))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
