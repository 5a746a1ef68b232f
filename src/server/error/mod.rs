//! Error types for the movie API server.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`], which handlers
//! return directly. Client facing errors (validation, missing movies) carry their own
//! response mapping; everything else is logged and reported as a generic 500.

pub mod config;
pub mod movie;
pub mod refresh;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, movie::MovieError, refresh::RefreshError,
        validation::ValidationError,
    },
};

/// Main error type for the movie API server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and library
/// errors automatically. The `IntoResponse` implementation maps each variant to its HTTP
/// response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Movie lookup error (unknown movie, empty character list).
    #[error(transparent)]
    MovieError(#[from] MovieError),
    /// Malformed client input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Catalog refresh cycle error.
    #[error(transparent)]
    RefreshError(#[from] RefreshError),
    /// SWAPI client error (requests, decoding, unresolvable resource URLs).
    #[error(transparent)]
    CatalogError(#[from] swapi::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Redis cache error (connection, command or script execution).
    #[error(transparent)]
    CacheError(#[from] fred::error::Error),
    /// Cached entry could not be encoded or decoded.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For unknown movies or movies without matching characters
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MovieError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                message: "Internal server error".to_string(),
                error: "Something went wrong, please try again later".to_string(),
            }),
        )
            .into_response()
    }
}
