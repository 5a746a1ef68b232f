use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        movie::MovieDto,
    },
    server::{
        controller::util::params::{parse_movie_id, query_params, PaginationParams},
        error::Error,
        model::app::AppState,
        service::movie::MovieService,
    },
};

pub static MOVIE_TAG: &str = "movie";

/// List movies ordered by release date with their comment counts
#[utoipa::path(
    get,
    path = "/movies",
    tag = MOVIE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Success when listing movies", body = ApiResponse<Vec<MovieDto>>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movies(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let params = query_params(params)?;
    let movie_service = MovieService::new(&state.db, state.cache.as_ref());

    let (movies, total) = movie_service.list_movies(params.pagination()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, "Movies retrieved successfully", movies).with_count(total)),
    ))
}

/// Get a single movie with its comment count
#[utoipa::path(
    get,
    path = "/movies/{movie_id}",
    tag = MOVIE_TAG,
    params(("movie_id" = String, Path, description = "SWAPI film id")),
    responses(
        (status = 200, description = "Success when retrieving the movie", body = ApiResponse<MovieDto>),
        (status = 400, description = "Invalid movie id", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let movie_id = parse_movie_id(&movie_id)?;
    let movie_service = MovieService::new(&state.db, state.cache.as_ref());

    let movie = movie_service.get_movie(movie_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(200, "Movie retrieved successfully", movie)),
    ))
}
