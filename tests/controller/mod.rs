//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the router tests go through the full
//! axum stack.

mod get_comments;
mod get_movie;
mod get_movie_characters;
mod health;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use movie_api_test_utils::prelude::*;

use crate::{
    util::{cache_with_characters, cache_with_movies, json_body},
    TestContextExt,
};
