//! HTTP controller endpoints for the movie API.
//!
//! Controllers validate path, query and body input, call the services and wrap results in the
//! response envelope. Invalid input is rejected with a 400 before any backend call.

pub mod character;
pub mod comment;
pub mod health;
pub mod movie;
pub mod util;
