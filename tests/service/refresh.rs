//! Tests for the catalog refresh cycle against a mock SWAPI server.

use std::sync::Arc;

use movie_api::server::{
    data::cache::{MemoryMovieCache, MovieCache},
    error::Error,
    model::character::{CharacterQuery, Gender},
    service::refresh::{CatalogRefreshService, RefreshReport},
    util::pagination::Pagination,
};

use super::*;

async fn character_ids(cache: &MemoryMovieCache, movie_id: i64) -> Vec<i64> {
    cache
        .get_characters_by_movie_id(movie_id, &CharacterQuery::default())
        .await
        .unwrap()
        .characters
        .into_iter()
        .map(|c| c.character_id)
        .collect()
}

/// Two films sharing character 2: every character is fetched once and cached under each
/// movie referencing it.
#[tokio::test]
async fn fetches_shared_character_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_films_endpoint(
            vec![factory::mock_film(1, &[1, 2]), factory::mock_film(2, &[2, 3])],
            1,
        )
        .with_person_endpoint(1, factory::mock_person(1, "172"), 1)
        .with_person_endpoint(2, factory::mock_person(2, "167"), 1)
        .with_person_endpoint(3, factory::mock_person(3, "96"), 1)
        .build()
        .await?;

    let cache = Arc::new(MemoryMovieCache::new());
    let report = CatalogRefreshService::new(&test.catalog, &*cache)
        .refresh()
        .await
        .unwrap();

    assert_eq!(
        report,
        RefreshReport {
            movies: 2,
            characters: 4,
            failed_batches: 0,
            failed_writes: 0,
            incomplete_movies: 0,
        }
    );
    assert_eq!(character_ids(&cache, 1).await, vec![1, 2]);
    assert_eq!(character_ids(&cache, 2).await, vec![2, 3]);

    test.assert_mocks();

    Ok(())
}

/// Running the same refresh twice leaves the cache in the same state
#[tokio::test]
async fn refresh_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_films_endpoint(vec![factory::mock_film(1, &[1, 2])], 2)
        .with_person_endpoint(1, factory::mock_person(1, "172"), 2)
        .with_person_endpoint(2, factory::mock_person(2, "167"), 2)
        .build()
        .await?;

    let cache = Arc::new(MemoryMovieCache::new());
    let service = CatalogRefreshService::new(&test.catalog, &*cache);

    let first = service.refresh().await.unwrap();
    let movies = cache.get_movies(Pagination::default()).await.unwrap();
    let characters = cache
        .get_characters_by_movie_id(1, &CharacterQuery::default())
        .await
        .unwrap();

    let second = service.refresh().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        cache.get_movies(Pagination::default()).await.unwrap(),
        movies
    );
    assert_eq!(
        cache
            .get_characters_by_movie_id(1, &CharacterQuery::default())
            .await
            .unwrap(),
        characters
    );

    test.assert_mocks();

    Ok(())
}

/// A failed fetch skips its whole batch. Movies referencing a skipped character keep their
/// cached entries, movies fully covered by other batches are still rewritten.
#[tokio::test]
async fn keeps_cached_characters_of_failed_batch() -> Result<(), TestError> {
    let character_ids_in_film: Vec<i64> = (1..=11).collect();
    let mut builder = TestBuilder::new()
        .with_films_endpoint(
            vec![
                factory::mock_film(1, &character_ids_in_film),
                factory::mock_film(2, &[11]),
            ],
            1,
        )
        .with_person_error_endpoint(3, 503, 1);

    for id in character_ids_in_film.iter().filter(|id| **id != 3) {
        builder = builder.with_person_endpoint(*id, factory::mock_person(*id, "150"), 1);
    }

    let test = builder.build().await?;

    let cache = cache_with_movies(&[1, 2]).await;
    let cached: Vec<_> = character_ids_in_film
        .iter()
        .map(|id| cached_character(1, *id, &format!("Person {}", id), "male", 150))
        .collect();
    cache.set_characters_by_movie_id(1, cached).await.unwrap();

    let report = CatalogRefreshService::new(&test.catalog, &*cache)
        .refresh()
        .await
        .unwrap();

    assert_eq!(report.failed_batches, 1);
    assert_eq!(report.incomplete_movies, 1);
    assert_eq!(report.characters, 1);
    assert_eq!(report.movies, 2);
    assert_eq!(character_ids(&cache, 1).await, character_ids_in_film);
    assert_eq!(character_ids(&cache, 2).await, vec![11]);

    test.assert_mocks();

    Ok(())
}

/// A failed film listing aborts the cycle before the cache is touched
#[tokio::test]
async fn leaves_cache_untouched_when_films_fail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/films/")
                .with_status(500)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let cache = cache_with_movies(&[9]).await;
    let result = CatalogRefreshService::new(&test.catalog, &*cache)
        .refresh()
        .await;

    assert!(matches!(result, Err(Error::CatalogError(_))));

    let page = cache.get_movies(Pagination::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.movies[0].id, 9);

    test.assert_mocks();

    Ok(())
}

/// Characters no longer referenced by a film are dropped, heights that are not numbers
/// become 0
#[tokio::test]
async fn replaces_stale_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_films_endpoint(vec![factory::mock_film(1, &[1, 2])], 1)
        .with_person_endpoint(
            1,
            factory::mock_named_person(1, "Luke Skywalker", "male", "172"),
            1,
        )
        .with_person_endpoint(
            2,
            factory::mock_named_person(2, "Padmé Amidala", "female", "unknown"),
            1,
        )
        .build()
        .await?;

    let cache = cache_with_movies(&[1]).await;
    cache
        .set_characters_by_movie_id(1, vec![cached_character(1, 99, "Jar Jar", "male", 196)])
        .await
        .unwrap();

    CatalogRefreshService::new(&test.catalog, &*cache)
        .refresh()
        .await
        .unwrap();

    assert_eq!(character_ids(&cache, 1).await, vec![1, 2]);

    let query = CharacterQuery {
        gender: Some(Gender::Female),
        ..Default::default()
    };
    let search = cache.get_characters_by_movie_id(1, &query).await.unwrap();
    assert_eq!(search.characters[0].height_cm, 0);

    test.assert_mocks();

    Ok(())
}
