//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod points;
pub mod submit;
