//! Map point entities.

use chrono::{DateTime, Utc};

use crate::domain::entities::Role;
use crate::geo::Coordinate;

/// A persisted map point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Store-assigned record id.
    pub id: String,
    pub name: String,
    pub role: Role,
    pub coordinate: Coordinate,
    /// Record creation time, when the store reports one.
    pub created_time: Option<DateTime<Utc>>,
}

/// A point about to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub name: String,
    pub role: Role,
    pub coordinate: Coordinate,
}
