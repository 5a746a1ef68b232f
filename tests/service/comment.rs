use movie_api::server::{
    error::{movie::MovieError, validation::ValidationError, Error},
    service::comment::CommentService,
    util::pagination::Pagination,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Commenting on a movie that is not cached fails without writing anything
#[tokio::test]
async fn rejects_comment_on_missing_movie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;
    let cache = cache_with_movies(&[1]).await;
    let service = CommentService::new(&test.db, &*cache);

    let result = service
        .add_comment(4, "Hello there", "127.0.0.1".to_string())
        .await;

    assert!(matches!(
        result,
        Err(Error::MovieError(MovieError::NotFound(4)))
    ));
    assert_eq!(entity::prelude::Comment::find().count(&test.db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn validates_message_before_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;
    let cache = cache_with_movies(&[]).await;
    let service = CommentService::new(&test.db, &*cache);

    let result = service.add_comment(4, "  ", "127.0.0.1".to_string()).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingMessage))
    ));

    Ok(())
}

#[tokio::test]
async fn adds_and_lists_comments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;
    let cache = cache_with_movies(&[1]).await;
    let service = CommentService::new(&test.db, &*cache);

    let first = service
        .add_comment(1, "Hello there", "10.0.0.1".to_string())
        .await
        .unwrap();
    let second = service
        .add_comment(1, "General Kenobi", "10.0.0.2".to_string())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    let (comments, total) = service
        .list_comments(1, Pagination::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().any(|c| c.ip_address == "10.0.0.2"));

    Ok(())
}
