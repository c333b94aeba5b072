//! Handler for point listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::points::{PointsQuery, PointsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists map points, newest first.
///
/// # Endpoint
///
/// `GET /api/points?max=N`
///
/// `max` defaults to the configured page size and is clamped to the
/// configured cap. Records the store cannot render (missing name, bad
/// coordinates, unknown role) are already filtered out by the store.
///
/// # Errors
///
/// Returns 502 Bad Gateway when the store is unreachable.
pub async fn points_handler(
    State(state): State<AppState>,
    Query(query): Query<PointsQuery>,
) -> Result<Json<PointsResponse>, AppError> {
    let max = query
        .max
        .unwrap_or(state.points_default_max)
        .min(state.points_max_cap);

    let points = state.store.list_points(max).await?;

    Ok(Json(PointsResponse {
        count: points.len(),
        points: points.into_iter().map(Into::into).collect(),
    }))
}
