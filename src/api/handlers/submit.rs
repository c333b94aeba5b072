//! Handler for pin submission.

use axum::{Json, extract::State};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::submit::{SubmitRequest, SubmitResponse};
use crate::domain::entities::{NewPoint, Role};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a map point from a name, a role, and a Google Maps link.
///
/// # Endpoint
///
/// `POST /api/submit`
///
/// # Request Flow
///
/// 1. Validate the payload and parse the role
/// 2. Resolve the link (shortlinks expand through redirects) and extract
///    coordinates, falling back to the original link
/// 3. Persist the point to the store
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Anna",
///   "link": "https://maps.app.goo.gl/abc123",
///   "role": "RED PINS"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails, the role is unknown, or
/// no coordinates could be extracted; in the latter case the error details
/// carry the resolved URL so the user can retry with a different link.
/// Returns 502 Bad Gateway when the store rejects the write.
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    payload.validate()?;

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("Missing name", json!({})));
    }

    let role: Role = payload.role.trim().parse().map_err(|_| {
        AppError::bad_request(
            "Invalid role",
            json!({
                "role": payload.role,
                "allowed": Role::ALL.map(|r| r.as_str()),
            }),
        )
    })?;

    let located = state.locator.locate(&payload.link).await;
    let Some(coordinate) = located.coordinate else {
        return Err(AppError::coordinates_not_found(located.resolved_url));
    };

    let point = state
        .store
        .create_point(NewPoint {
            name,
            role,
            coordinate,
        })
        .await?;

    info!(
        "point {} created at {},{} ({})",
        point.id, coordinate.lat, coordinate.lng, role
    );

    Ok(Json(SubmitResponse {
        point: point.into(),
    }))
}
