//! API Routes
//!
//! Configures the Axum router with all shout service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, stats_handler, transform_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /`, `POST /v1`, `POST /v1/` - Transform the `data` field
/// - `GET /health` - Upstream probe
/// - `GET /stats` - Cache statistics
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(transform_handler))
        .route("/v1", post(transform_handler))
        .route("/v1/", post(transform_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
