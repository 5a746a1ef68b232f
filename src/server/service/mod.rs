//! Service layer for business logic.
//!
//! `refresh` mirrors the SWAPI catalog into the movie cache, `movie` and `comment` implement the
//! read and write operations behind the HTTP API.

pub mod comment;
pub mod movie;
pub mod refresh;
