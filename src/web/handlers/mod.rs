//! Server-rendered page handlers.

pub mod form;
pub mod map;

pub use form::form_handler;
pub use map::map_handler;
