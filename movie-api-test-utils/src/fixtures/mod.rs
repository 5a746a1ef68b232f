//! Fixture utilities for database records and mock HTTP endpoints.
//!
//! - `comment` - comment rows in the test database
//! - `swapi` - SWAPI film and people payloads and their mock endpoints

pub mod comment;
pub mod swapi;
