//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered with its utoipa specification; the collected OpenAPI document
//! is served at `/docs/openapi.json` with Swagger UI at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness check
/// - `GET /movies` - Movies ordered by release date with comment counts
/// - `GET /movies/{movie_id}` - A single movie
/// - `GET /characters/{movie_id}` - Characters of a movie with sorting, filtering and totals
/// - `POST /comments/{movie_id}` - Post a comment on a movie
/// - `GET /comments/{movie_id}` - Comments of a movie, newest first
///
/// Handlers read the client address from `ConnectInfo`, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Movie API", description = "Star Wars movies, characters and comments"),
        tags(
            (name = controller::movie::MOVIE_TAG, description = "Movie API routes"),
            (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
            (name = controller::comment::COMMENT_TAG, description = "Comment API routes"),
            (name = controller::health::HEALTH_TAG, description = "Service health"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::movie::get_movies))
        .routes(routes!(controller::movie::get_movie))
        .routes(routes!(controller::character::get_movie_characters))
        .routes(routes!(
            controller::comment::add_comment,
            controller::comment::get_comments
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
