//! # REST Handlers
//!
//! Request handlers, shared state and response types.

use crate::api::rest::gate::ValidPostalCode;
use crate::application::error::ApplicationError;
use crate::application::use_cases::resolve_address::ResolveAddressUseCase;
use crate::domain::entities::address::NormalizedAddress;
use crate::domain::errors::DomainError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Postal code resolution.
    pub resolve_address: ResolveAddressUseCase,
}

impl AppState {
    /// Creates the shared state.
    #[must_use]
    pub fn new(resolve_address: ResolveAddressUseCase) -> Self {
        Self { resolve_address }
    }
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable reason.
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
}

/// Error returned by handlers.
///
/// Not found is answered with an empty body; other errors carry an
/// [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed request.
    BadRequest(String),
    /// No provider had data.
    NotFound,
    /// Unexpected server-side failure.
    Internal(String),
}

impl ApiError {
    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        if error.is_client_error() {
            Self::BadRequest(error.to_string())
        } else {
            Self::Internal(error.to_string())
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(e) => Self::from(e),
            ApplicationError::NotFound { .. } => Self::NotFound,
            ApplicationError::Configuration(message) => Self::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound => status.into_response(),
            Self::BadRequest(error) | Self::Internal(error) => {
                (status, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}

/// `GET /{cep}`: resolve a postal code to an address.
pub async fn resolve_postal_code(
    State(state): State<Arc<AppState>>,
    ValidPostalCode(code): ValidPostalCode,
) -> Result<Json<NormalizedAddress>, ApiError> {
    let address = state.resolve_address.execute(&code).await?;
    Ok(Json(address))
}

/// `GET /health`: liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_empty_body_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::from(ApplicationError::from(DomainError::invalid_postal_code(3)));
        assert_eq!(
            err,
            ApiError::bad_request("cep length should be exactly 8, given 3")
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_side_domain_error_maps_to_internal() {
        let err = ApiError::from(DomainError::invalid_endpoint_template("viacep", "bad"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn configuration_maps_to_internal() {
        let err = ApiError::from(ApplicationError::configuration("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn exhaustion_maps_to_not_found() {
        let err = ApiError::from(ApplicationError::not_found("01001000"));
        assert_eq!(err, ApiError::NotFound);
    }
}
