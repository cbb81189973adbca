//! API error type mapping registry failures onto HTTP responses.
//!
//! Every rejection serializes as `{"detail": "<message>"}` — the shape the
//! bundled front-end reads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            Self::Registry(RegistryError::AlreadyRegistered)
            | Self::Registry(RegistryError::CapacityExceeded) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "request rejected");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
