//! HTTP request handlers.

pub mod health;
pub mod points;
pub mod submit;

pub use health::health_handler;
pub use points::points_handler;
pub use submit::submit_handler;
