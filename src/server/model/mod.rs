//! Server application models and type definitions.
//!
//! Application state shared with handlers, the shapes stored in the movie cache, character
//! query options and database model aliases.

pub mod app;
pub mod character;
pub mod db;
pub mod movie;
