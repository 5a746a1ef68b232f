use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use uuid::Uuid;

use crate::TestContext;

impl TestContext {
    pub fn comment(&self) -> CommentFixtures<'_> {
        CommentFixtures { test: self }
    }
}

pub struct CommentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CommentFixtures<'a> {
    /// Insert a comment posted now from `127.0.0.1`
    pub async fn insert_mock_comment(
        &self,
        movie_id: i64,
        message: &str,
    ) -> Result<entity::comment::Model, DbErr> {
        self.insert_mock_comment_at(movie_id, message, Utc::now().naive_utc())
            .await
    }

    /// Insert a comment with an explicit creation time, for ordering assertions
    pub async fn insert_mock_comment_at(
        &self,
        movie_id: i64,
        message: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::comment::Model, DbErr> {
        let comment = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            movie_id: ActiveValue::Set(movie_id),
            message: ActiveValue::Set(message.to_string()),
            ip_address: ActiveValue::Set("127.0.0.1".to_string()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(None),
        };

        comment.insert(&self.test.db).await
    }
}
