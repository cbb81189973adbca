pub mod activities;
pub mod activity;

use axum::http::StatusCode;

/// Liveness probe.
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
