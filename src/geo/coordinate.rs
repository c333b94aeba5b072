//! Latitude/longitude pair.

use serde::Serialize;

/// A point on Earth.
///
/// Both components are finite once produced by [`crate::geo::extract`];
/// no further range validation is applied (latitude is not clamped to
/// `[-90, 90]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}
