use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections of malformed client input, raised before any backend call
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid movie ID {0:?}, expected a positive integer")]
    InvalidMovieId(String),
    #[error("Invalid sortKey {0:?}, expected one of: name, height")]
    InvalidSortKey(String),
    #[error("Invalid sortOrder {0:?}, expected one of: asc, desc")]
    InvalidSortOrder(String),
    #[error("Invalid gender {0:?}, expected one of: male, female")]
    InvalidGender(String),
    #[error("Comment message is required")]
    MissingMessage,
    #[error("Comment message must be at most {max} characters, got {len}")]
    MessageTooLong { max: usize, len: usize },
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// Query string could not be deserialized (e.g. a repeated parameter)
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                code: StatusCode::BAD_REQUEST.as_u16(),
                message: "Invalid request".to_string(),
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
