use std::net::SocketAddr;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        ConnectInfo, Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        comment::{AddCommentDto, CommentDto},
    },
    server::{
        controller::util::params::{parse_movie_id, query_params, PaginationParams},
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::comment::CommentService,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// Post a comment on a movie
///
/// The comment id, timestamp and client address are assigned by the server.
#[utoipa::path(
    post,
    path = "/comments/{movie_id}",
    tag = COMMENT_TAG,
    params(("movie_id" = String, Path, description = "SWAPI film id")),
    request_body = AddCommentDto,
    responses(
        (status = 201, description = "Comment added", body = ApiResponse<CommentDto>),
        (status = 400, description = "Invalid movie id or message", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(movie_id): Path<String>,
    body: Result<Json<AddCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let movie_id = parse_movie_id(&movie_id)?;
    let Json(body) = body.map_err(|e| ValidationError::InvalidBody(e.body_text()))?;
    let comment_service = CommentService::new(&state.db, state.cache.as_ref());

    let comment = comment_service
        .add_comment(movie_id, &body.message, addr.ip().to_string())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, "Comment added successfully", comment)),
    ))
}

/// List the comments of a movie, newest first
#[utoipa::path(
    get,
    path = "/comments/{movie_id}",
    tag = COMMENT_TAG,
    params(
        ("movie_id" = String, Path, description = "SWAPI film id"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Success when listing comments", body = ApiResponse<Vec<CommentDto>>),
        (status = 400, description = "Invalid movie id", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let movie_id = parse_movie_id(&movie_id)?;
    let params = query_params(params)?;
    let comment_service = CommentService::new(&state.db, state.cache.as_ref());

    let (comments, total) = comment_service
        .list_comments(movie_id, params.pagination())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, "Comments retrieved successfully", comments).with_count(total)),
    ))
}
