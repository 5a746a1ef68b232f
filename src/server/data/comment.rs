use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{model::db::CommentModel, util::pagination::Pagination};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new comment for a movie, the id is generated here
    pub async fn create(
        &self,
        movie_id: i64,
        message: String,
        ip_address: String,
    ) -> Result<CommentModel, DbErr> {
        let comment = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            movie_id: ActiveValue::Set(movie_id),
            message: ActiveValue::Set(message),
            ip_address: ActiveValue::Set(ip_address),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(None),
        };

        comment.insert(self.db).await
    }

    /// Get a page of a movie's comments, newest first, excluding deleted comments
    pub async fn get_by_movie_id(
        &self,
        movie_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<CommentModel>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::MovieId.eq(movie_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .offset(pagination.offset())
            .limit(pagination.page_size())
            .all(self.db)
            .await
    }

    /// Count a movie's comments, excluding deleted comments
    pub async fn count_by_movie_id(&self, movie_id: i64) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::MovieId.eq(movie_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Mark a comment as deleted
    ///
    /// # Returns
    /// - `Ok(Some(_))`: the updated comment
    /// - `Ok(None)`: no comment with the provided id exists or it was already deleted
    /// - `Err(DbErr)`: a database-related error occurred
    pub async fn soft_delete(&self, comment_id: Uuid) -> Result<Option<CommentModel>, DbErr> {
        let comment = match entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        {
            Some(comment) => comment,
            None => return Ok(None),
        };

        let now = Utc::now().naive_utc();
        let mut comment_am = comment.into_active_model();
        comment_am.deleted_at = ActiveValue::Set(Some(now));
        comment_am.updated_at = ActiveValue::Set(Some(now));

        let comment = comment_am.update(self.db).await?;

        Ok(Some(comment))
    }
}
