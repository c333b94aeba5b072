//! In-process point store.
//!
//! Used when no Airtable token is configured, and by handler tests. Points
//! live only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{NewPoint, Point};
use crate::domain::repositories::PointStore;
use crate::error::AppError;

/// A point store that keeps everything in a `Vec`.
#[derive(Default)]
pub struct MemoryStore {
    points: Mutex<Vec<Point>>,
    seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PointStore for MemoryStore {
    async fn list_points(&self, max: usize) -> Result<Vec<Point>, AppError> {
        let points = self
            .points
            .lock()
            .map_err(|_| AppError::internal("Point store lock poisoned", serde_json::json!({})))?;

        // Newest first, matching the Airtable sort order.
        Ok(points.iter().rev().take(max).cloned().collect())
    }

    async fn create_point(&self, new_point: NewPoint) -> Result<Point, AppError> {
        let id = format!("mem{}", self.seq.fetch_add(1, Ordering::Relaxed) + 1);
        let point = Point {
            id,
            name: new_point.name,
            role: new_point.role,
            coordinate: new_point.coordinate,
            created_time: Some(Utc::now()),
        };

        let mut points = self
            .points
            .lock()
            .map_err(|_| AppError::internal("Point store lock poisoned", serde_json::json!({})))?;
        points.push(point.clone());

        Ok(point)
    }
}
