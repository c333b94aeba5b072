//! Store trait for map point data access.

use crate::domain::entities::{NewPoint, Point};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for map points.
///
/// The record lifecycle is owned by the external store; this trait only
/// covers the two operations the service needs.
///
/// # Implementations
///
/// - [`crate::infrastructure::airtable::AirtableStore`] - Airtable REST API
/// - [`crate::infrastructure::store::MemoryStore`] - in-process fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointStore: Send + Sync {
    /// Lists up to `max` points, newest first.
    ///
    /// Records the store cannot turn into a well-formed [`Point`] (missing
    /// name, non-finite coordinates, unknown role) are silently skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the store is unreachable or
    /// rejects the request.
    async fn list_points(&self, max: usize) -> Result<Vec<Point>, AppError>;

    /// Persists a new point and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the store is unreachable or
    /// rejects the request.
    async fn create_point(&self, new_point: NewPoint) -> Result<Point, AppError>;
}
