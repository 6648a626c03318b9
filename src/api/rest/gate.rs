//! # Input Gate
//!
//! Path extractor that validates the postal code before any handler runs.
//!
//! A request whose `{cep}` segment is not a valid [`PostalCode`] is rejected
//! with `400 Bad Request` and a JSON reason, so the race is never started.

use crate::api::rest::handlers::ApiError;
use crate::domain::value_objects::PostalCode;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// A postal code extracted from the path and validated.
#[derive(Debug, Clone)]
pub struct ValidPostalCode(pub PostalCode);

impl<S> FromRequestParts<S> for ValidPostalCode
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        match PostalCode::parse(raw) {
            Ok(code) => Ok(Self(code)),
            Err(error) => {
                tracing::debug!(error = %error, "rejected postal code");
                Err(ApiError::from(error))
            }
        }
    }
}
