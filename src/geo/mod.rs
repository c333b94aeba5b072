//! Coordinate extraction and shortlink resolution.
//!
//! The pure, synchronous extractor lives in [`extract`]; the network-facing
//! resolver and the resolve-then-extract orchestration live in [`resolve`].

pub mod coordinate;
pub mod extract;
pub mod resolve;

pub use coordinate::Coordinate;
pub use extract::extract;
pub use resolve::{CoordinateLocator, HttpRedirectResolver, Located, RedirectResolver};
