use fred::prelude::*;
use movie_api::server::{
    model::character::{CharacterQuery, Gender, SortKey, SortOrder},
    util::pagination::Pagination,
};

use super::*;
use crate::util::{cached_character, cached_movie};

#[tokio::test]
async fn lists_movies_by_release_date() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let cache = redis.cache();

    cache
        .set_movies(vec![cached_movie(3), cached_movie(1), cached_movie(2)])
        .await
        .unwrap();

    let page = cache.get_movies(Pagination::new(1, 2)).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(
        page.movies.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let page = cache.get_movies(Pagination::new(2, 2)).await.unwrap();
    assert_eq!(page.movies[0].id, 3);

    redis.cleanup(&[]).await
}

/// Replacing the movie set removes movies missing from the new set
#[tokio::test]
async fn replaces_movie_set() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let cache = redis.cache();

    cache
        .set_movies(vec![cached_movie(1), cached_movie(2)])
        .await
        .unwrap();
    cache.set_movies(vec![cached_movie(2)]).await.unwrap();

    assert!(cache.get_movie_by_id(1).await.unwrap().is_none());
    assert_eq!(cache.get_movie_by_id(2).await.unwrap(), Some(cached_movie(2)));

    let exists: bool = redis
        .redis_pool
        .exists(redis.keys().movie(1))
        .await?;
    assert!(!exists);

    redis.cleanup(&[]).await
}

#[tokio::test]
async fn searches_characters() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let cache = redis.cache();

    cache
        .set_characters_by_movie_id(
            1,
            vec![
                cached_character(1, 1, "Luke Skywalker", "male", 172),
                cached_character(1, 5, "Leia Organa", "female", 150),
                cached_character(1, 14, "Han Solo", "male", 180),
            ],
        )
        .await
        .unwrap();

    let query = CharacterQuery {
        sort_key: Some(SortKey::Height),
        sort_order: SortOrder::Desc,
        gender: Some(Gender::Male),
        pagination: Pagination::new(1, 1),
    };
    let search = cache.get_characters_by_movie_id(1, &query).await.unwrap();

    assert_eq!(search.total, 2);
    assert_eq!(search.total_height_cm, 352);
    assert_eq!(search.characters.len(), 1);
    assert_eq!(search.characters[0].name, "Han Solo");

    cache
        .set_characters_by_movie_id(1, vec![cached_character(1, 5, "Leia Organa", "female", 150)])
        .await
        .unwrap();

    let search = cache
        .get_characters_by_movie_id(1, &CharacterQuery::default())
        .await
        .unwrap();
    assert_eq!(search.total, 1);

    redis.cleanup(&[1]).await
}

/// Movies dropped from the set take their character entries with them
#[tokio::test]
async fn drops_characters_of_removed_movies() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let cache = redis.cache();
    let keys = redis.keys();

    cache
        .set_movies(vec![cached_movie(1), cached_movie(2)])
        .await
        .unwrap();
    for movie_id in [1, 2] {
        cache
            .set_characters_by_movie_id(
                movie_id,
                vec![cached_character(movie_id, 1, "Luke Skywalker", "male", 172)],
            )
            .await
            .unwrap();
    }

    cache.set_movies(vec![cached_movie(2)]).await.unwrap();

    let exists: u32 = redis
        .redis_pool
        .exists(vec![keys.movie_characters(1), keys.character(1, 1)])
        .await?;
    assert_eq!(exists, 0);

    let search = cache
        .get_characters_by_movie_id(2, &CharacterQuery::default())
        .await
        .unwrap();
    assert_eq!(search.total, 1);

    redis.cleanup(&[2]).await
}
