//! Core domain entities.

pub mod point;
pub mod role;

pub use point::{NewPoint, Point};
pub use role::{Role, UnknownRole};
