//! Utility functions and helpers for server operations.
//!
//! Request pagination handling and the metric to imperial height conversion used when
//! presenting characters.

pub mod height;
pub mod pagination;
