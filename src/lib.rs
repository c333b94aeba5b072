//! # Praymap
//!
//! A community prayer map service. People submit their name, a role, and a
//! Google Maps link through a web form; the server extracts latitude and
//! longitude from the link and stores a record in Airtable. A Leaflet map
//! page polls the same store and renders pins grouped by role.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Point and role entities, the store trait
//! - **Geo Layer** ([`geo`]) - Coordinate extraction and shortlink resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Airtable client, in-memory fallback
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered map and form pages
//!
//! ## Features
//!
//! - Parses the common Google Maps URL shapes (`@lat,lng`, `?q=`, `?ll=`,
//!   `!3d..!4d..`, `/maps/search/`) in a fixed priority order
//! - Expands `maps.app.goo.gl` shortlinks by following redirects
//! - Role-colored pins with per-role layer toggles on the map page
//! - Rate limiting and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at an Airtable base (omit to run on the in-memory store)
//! export AIRTABLE_TOKEN="pat..."
//! export AIRTABLE_BASE_ID="app..."
//! export AIRTABLE_TABLE_ID="tbl..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod geo;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{NewPoint, Point, Role};
    pub use crate::domain::repositories::PointStore;
    pub use crate::error::AppError;
    pub use crate::geo::{Coordinate, CoordinateLocator, RedirectResolver, extract};
    pub use crate::state::AppState;
}
