//! API route configuration.

use crate::api::handlers::{health_handler, points_handler, submit_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /points` - List map points (newest first)
/// - `POST /submit` - Submit a new pin
/// - `GET  /health` - Service health check
///
/// Reads share a generous per-IP rate limit; the submission endpoint,
/// which fans out to the redirect resolver and the store, gets a stricter
/// one.
pub fn routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/points", get(points_handler))
        .route("/health", get(health_handler))
        .layer(rate_limit::layer());

    let writes = Router::new()
        .route("/submit", post(submit_handler))
        .layer(rate_limit::secure_layer());

    reads.merge(writes)
}
