use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Movie not found")]
    NotFound(i64),
    #[error("No characters found")]
    NoCharacters(i64),
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(movie_id) | Self::NoCharacters(movie_id) => {
                tracing::debug!(movie_id = %movie_id, "{}", self);
            }
        }

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                code: StatusCode::NOT_FOUND.as_u16(),
                message: self.to_string(),
                error: "not found".to_string(),
            }),
        )
            .into_response()
    }
}
