//! Test utilities for the movie API.
//!
//! Tests describe their environment with [`TestBuilder`] and receive a [`TestContext`] holding
//! an in-memory SQLite database, a mockito server standing in for SWAPI and a SWAPI client
//! pointed at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::swapi::factory, TestBuilder, TestContext, TestError};
}
