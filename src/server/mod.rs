//! Server application core modules.
//!
//! HTTP routing, request handling, the SWAPI catalog refresh and its scheduler, the movie
//! cache and the comment store.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
