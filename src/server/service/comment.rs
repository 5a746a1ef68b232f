use sea_orm::DatabaseConnection;

use crate::{
    model::comment::CommentDto,
    server::{
        data::{cache::MovieCache, comment::CommentRepository},
        error::{validation::ValidationError, Error},
        model::db::CommentModel,
        service::movie::MovieService,
        util::pagination::Pagination,
    },
};

/// Longest accepted comment message, counted in characters
pub const MAX_COMMENT_LENGTH: usize = 500;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn MovieCache,
}

impl<'a> CommentService<'a> {
    /// Creates a new instance of [`CommentService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn MovieCache) -> Self {
        Self { db, cache }
    }

    /// Add a comment to a movie
    ///
    /// The message is validated before the movie lookup, nothing is written for unknown movies.
    ///
    /// # Returns
    /// - `Ok(CommentDto)`: the stored comment
    /// - `Err(Error::ValidationError(_))`: the message is empty or too long
    /// - `Err(Error::MovieError(MovieError::NotFound))`: the movie is not cached
    /// - `Err(Error::DbErr(_))`: the comment could not be stored
    pub async fn add_comment(
        &self,
        movie_id: i64,
        message: &str,
        ip_address: String,
    ) -> Result<CommentDto, Error> {
        let comment_repo = CommentRepository::new(self.db);
        let movie_service = MovieService::new(self.db, self.cache);

        let message = validate_message(message)?;
        movie_service.find_movie(movie_id).await?;

        let comment = comment_repo
            .create(movie_id, message, ip_address)
            .await?;

        tracing::debug!(movie_id, comment_id = %comment.id, "Added comment");

        Ok(into_dto(comment))
    }

    /// Get a page of a movie's comments, newest first, with the movie's comment count
    pub async fn list_comments(
        &self,
        movie_id: i64,
        pagination: Pagination,
    ) -> Result<(Vec<CommentDto>, u64), Error> {
        let comment_repo = CommentRepository::new(self.db);
        let movie_service = MovieService::new(self.db, self.cache);

        movie_service.find_movie(movie_id).await?;

        let comments = comment_repo.get_by_movie_id(movie_id, pagination).await?;
        let total = comment_repo.count_by_movie_id(movie_id).await?;

        Ok((comments.into_iter().map(into_dto).collect(), total))
    }
}

/// Trim a comment message and check it is present and within [`MAX_COMMENT_LENGTH`]
pub fn validate_message(message: &str) -> Result<String, ValidationError> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }

    let len = message.chars().count();
    if len > MAX_COMMENT_LENGTH {
        return Err(ValidationError::MessageTooLong {
            max: MAX_COMMENT_LENGTH,
            len,
        });
    }

    Ok(message.to_string())
}

fn into_dto(comment: CommentModel) -> CommentDto {
    CommentDto {
        id: comment.id,
        movie_id: comment.movie_id,
        message: comment.message,
        ip_address: comment.ip_address,
        created_at: comment.created_at,
    }
}
