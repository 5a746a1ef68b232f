//! Data access layer.
//!
//! `comment` holds the SeaORM repository for user comments, `cache` the searchable movie and
//! character store filled by the catalog refresh.

pub mod cache;
pub mod comment;
