//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::PointStore;
use crate::geo::CoordinateLocator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PointStore>,
    pub locator: Arc<CoordinateLocator>,
    /// Points returned when the list query omits `max`.
    pub points_default_max: usize,
    /// Upper bound applied to the `max` query parameter.
    pub points_max_cap: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn PointStore>,
        locator: Arc<CoordinateLocator>,
        points_default_max: usize,
        points_max_cap: usize,
    ) -> Self {
        Self {
            store,
            locator,
            points_default_max,
            points_max_cap,
        }
    }
}
