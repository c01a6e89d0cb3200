//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, index, status, AppState};
use crate::metrics::track_http;

/// Create the application router.
///
/// Unknown paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Portfolio page
        .route("/", get(index))
        // JSON endpoints
        .route("/api/status", get(status))
        .route("/api/health", get(health))
        .with_state(state)
        .layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
}
