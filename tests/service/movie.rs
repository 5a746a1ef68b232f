use movie_api::server::{
    error::{movie::MovieError, Error},
    model::character::{CharacterQuery, Gender},
    service::movie::MovieService,
    util::pagination::Pagination,
};

use super::*;

#[tokio::test]
async fn lists_movies_with_live_comment_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_comment_table()
        .with_mock_comment(1, "A new hope")
        .build()
        .await?;
    let cache = cache_with_movies(&[2, 1]).await;
    let service = MovieService::new(&test.db, &*cache);

    let (movies, total) = service.list_movies(Pagination::default()).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].comment_count, 1);

    test.comment().insert_mock_comment(1, "Still great").await?;

    let (movies, _) = service.list_movies(Pagination::default()).await.unwrap();
    assert_eq!(movies[0].comment_count, 2);

    Ok(())
}

/// Page numbers at or below zero behave like the first page
#[tokio::test]
async fn non_positive_page_is_first_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;
    let cache = cache_with_movies(&[1, 2, 3]).await;
    let service = MovieService::new(&test.db, &*cache);

    let (first, _) = service.list_movies(Pagination::new(1, 2)).await.unwrap();
    let (zero, _) = service.list_movies(Pagination::new(0, 2)).await.unwrap();
    let (negative, _) = service.list_movies(Pagination::new(-5, 2)).await.unwrap();

    assert_eq!(first, zero);
    assert_eq!(first, negative);

    Ok(())
}

#[tokio::test]
async fn filters_characters_by_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let cache = cache_with_characters().await;
    let service = MovieService::new(&test.db, &*cache);

    let query = CharacterQuery {
        gender: Some(Gender::Female),
        ..Default::default()
    };
    let list = service.list_characters(1, query).await.unwrap();

    assert_eq!(list.total_count, 1);
    assert!(list.characters.iter().all(|c| c.gender == "female"));
    assert_eq!(list.total_cm, 150);
    assert_eq!(list.total_ft, "4");

    Ok(())
}

#[tokio::test]
async fn distinguishes_missing_movie_from_missing_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let cache = cache_with_movies(&[1]).await;
    let service = MovieService::new(&test.db, &*cache);

    let missing_movie = service.list_characters(2, CharacterQuery::default()).await;
    let no_characters = service.list_characters(1, CharacterQuery::default()).await;

    assert!(matches!(
        missing_movie,
        Err(Error::MovieError(MovieError::NotFound(2)))
    ));
    assert!(matches!(
        no_characters,
        Err(Error::MovieError(MovieError::NoCharacters(1)))
    ));

    Ok(())
}
