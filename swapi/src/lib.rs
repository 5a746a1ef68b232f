//! Async client for the subset of the Star Wars API (SWAPI) used by the movie API.
//!
//! Only the `films` and `people` resources are covered. SWAPI identifies resources by URL, so
//! [`id::resolve_id`] is provided to turn a resource URL into its numeric identifier.

pub mod client;
pub mod error;
pub mod id;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use id::resolve_id;
