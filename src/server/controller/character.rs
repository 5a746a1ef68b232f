use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        character::CharacterListDto,
    },
    server::{
        controller::util::params::{parse_movie_id, query_params, CharacterParams},
        error::Error,
        model::app::AppState,
        service::movie::MovieService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List the characters of a movie
///
/// Totals (count and summed height) cover every character matching the gender filter.
#[utoipa::path(
    get,
    path = "/characters/{movie_id}",
    tag = CHARACTER_TAG,
    params(
        ("movie_id" = String, Path, description = "SWAPI film id"),
        CharacterParams
    ),
    responses(
        (status = 200, description = "Success when listing characters", body = ApiResponse<CharacterListDto>),
        (status = 400, description = "Invalid movie id or query option", body = ErrorDto),
        (status = 404, description = "Movie not found or no character matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie_characters(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    params: Result<Query<CharacterParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let movie_id = parse_movie_id(&movie_id)?;
    let query = query_params(params)?.query()?;
    let movie_service = MovieService::new(&state.db, state.cache.as_ref());

    let characters = movie_service.list_characters(movie_id, query).await?;
    let total = characters.total_count;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(200, "Characters retrieved successfully", characters)
                .with_count(total),
        ),
    ))
}
