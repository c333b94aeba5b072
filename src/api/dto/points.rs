//! DTOs for the point listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Point, Role};

/// Query parameters for `GET /api/points`.
#[derive(Debug, Deserialize)]
pub struct PointsQuery {
    /// Maximum number of points to return; clamped to the configured cap.
    pub max: Option<usize>,
}

/// Response for `GET /api/points`.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub count: usize,
    pub points: Vec<PointDto>,
}

/// A map point as rendered by the frontend.
#[derive(Debug, Serialize)]
pub struct PointDto {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Pin color derived from the role; precomputed so the frontend does
    /// not need the role-to-color table.
    pub color: &'static str,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
}

impl From<Point> for PointDto {
    fn from(point: Point) -> Self {
        Self {
            id: point.id,
            name: point.name,
            color: point.role.color(),
            role: point.role,
            lat: point.coordinate.lat,
            lng: point.coordinate.lng,
            created_time: point.created_time,
        }
    }
}
