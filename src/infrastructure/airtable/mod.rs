//! Airtable-backed point store.

pub mod store;

pub use store::{AirtableConfig, AirtableError, AirtableStore};
