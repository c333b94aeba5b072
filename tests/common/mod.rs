#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use praymap::domain::entities::{NewPoint, Role};
use praymap::geo::{Coordinate, CoordinateLocator, RedirectResolver};
use praymap::infrastructure::store::MemoryStore;
use praymap::state::AppState;

/// Resolver that performs no network calls: every link is treated as
/// already final, the degraded-resolution contract of the real resolver.
pub struct PassthroughResolver;

#[async_trait]
impl RedirectResolver for PassthroughResolver {
    async fn resolve(&self, link: &str) -> String {
        link.trim().to_string()
    }
}

/// Resolver that returns a fixed URL regardless of input, simulating a
/// shortlink expansion.
pub struct FixedResolver(pub String);

#[async_trait]
impl RedirectResolver for FixedResolver {
    async fn resolve(&self, _link: &str) -> String {
        self.0.clone()
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    create_test_state_with_resolver(Arc::new(PassthroughResolver))
}

pub fn create_test_state_with_resolver(
    resolver: Arc<dyn RedirectResolver>,
) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let locator = Arc::new(CoordinateLocator::new(resolver));
    let state = AppState::new(store.clone(), locator, 2000, 5000);
    (state, store)
}

pub async fn seed_point(store: &MemoryStore, name: &str, role: Role, lat: f64, lng: f64) {
    use praymap::domain::repositories::PointStore;

    store
        .create_point(NewPoint {
            name: name.to_string(),
            role,
            coordinate: Coordinate { lat, lng },
        })
        .await
        .unwrap();
}
