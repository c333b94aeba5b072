//! Data access traits implemented by the infrastructure layer.

pub mod point_store;

pub use point_store::PointStore;

#[cfg(test)]
pub use point_store::MockPointStore;
