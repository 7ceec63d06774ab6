//! API routes

pub mod edge;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{routing::canonical_host_middleware, state::AppState};

/// Create all routes, wrapped in the canonical-host redirect
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Local emulation of the edge hook
    let edge_routes = Router::new().route("/_edge/viewer-request", post(edge::viewer_request));

    Router::new()
        .merge(health_routes)
        .merge(edge_routes)
        .layer(middleware::from_fn_with_state(
            state.redirector.clone(),
            canonical_host_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
