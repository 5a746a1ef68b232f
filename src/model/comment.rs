use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub movie_id: i64,
    pub message: String,
    pub ip_address: String,
    pub created_at: NaiveDateTime,
}

/// Request body for posting a comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCommentDto {
    #[serde(default)]
    pub message: String,
}
