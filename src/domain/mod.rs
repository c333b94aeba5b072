//! Domain layer: entities and data access traits.

pub mod entities;
pub mod repositories;
