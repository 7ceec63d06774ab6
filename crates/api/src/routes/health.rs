//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub legacy_host: String,
    pub canonical_origin: String,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        legacy_host: state.redirector.legacy_host().to_string(),
        canonical_origin: state.redirector.canonical_origin().to_string(),
    })
}

/// Liveness probe (just returns 200 if the server is running)
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. Nothing to wait on: the redirector is built before the
/// listener is bound.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}
