//! # REST API
//!
//! HTTP surface served with axum.
//!
//! # Endpoints
//!
//! - `GET /{cep}` - Resolve a postal code. `200` with the address,
//!   `400` with `{"error": ...}` for a malformed code, `404` with an empty
//!   body when no provider has data.
//! - `GET /health` - Liveness probe.
//!
//! # Usage
//!
//! ```ignore
//! use cep_race::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(resolve_address));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod gate;
pub mod handlers;
pub mod routes;

pub use gate::ValidPostalCode;
pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
