//! Infrastructure layer: external store integrations.

pub mod airtable;
pub mod store;
