//! Map page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Poll interval for the map page, in seconds.
const REFRESH_SECONDS: u64 = 15;

/// Template for the Leaflet map page.
///
/// Renders `templates/map.html`; the page polls `/api/points` and groups
/// pins into per-role layers with toggles.
#[derive(Template, WebTemplate)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub refresh_seconds: u64,
}

/// Renders the map page.
///
/// # Endpoint
///
/// `GET /`
pub async fn map_handler() -> impl IntoResponse {
    MapTemplate {
        refresh_seconds: REFRESH_SECONDS,
    }
}
