//! Web layer: server-rendered map and form pages.

pub mod handlers;
pub mod routes;
