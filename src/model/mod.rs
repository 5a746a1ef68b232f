//! Data transfer objects returned by the HTTP API.

pub mod api;
pub mod character;
pub mod comment;
pub mod movie;
