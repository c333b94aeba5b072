//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, map_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`     - The map
/// - `GET /form` - The submission form
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(map_handler))
        .route("/form", get(form_handler))
}
