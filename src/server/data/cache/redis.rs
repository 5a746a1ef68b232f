use async_trait::async_trait;
use chrono::Datelike;
use fred::prelude::*;
use serde::de::DeserializeOwned;

use super::{
    keys::CacheKeys,
    lua::{REPLACE_CHARACTERS_SCRIPT, REPLACE_MOVIES_SCRIPT},
    search_characters, MovieCache, MoviePage,
};
use crate::server::{
    error::Error,
    model::{
        character::{CachedCharacter, CharacterQuery, CharacterSearch},
        movie::CachedMovie,
    },
    util::pagination::Pagination,
};

/// [`MovieCache`] backed by Redis through a `fred` connection pool.
///
/// Replacements run as Lua scripts so each movie set or character list swap is atomic.
pub struct RedisMovieCache {
    pool: Pool,
    keys: CacheKeys,
}

impl RedisMovieCache {
    pub fn new(pool: Pool) -> Self {
        Self::with_namespace(pool, None)
    }

    /// Create a cache whose keys are prefixed with `namespace` (useful for test isolation)
    pub fn with_namespace(pool: Pool, namespace: Option<&str>) -> Self {
        Self {
            pool,
            keys: CacheKeys::new(namespace),
        }
    }

    /// Fetch and decode JSON values, silently dropping keys that vanished in between
    async fn get_many<T: DeserializeOwned>(&self, keys: Vec<String>) -> Result<Vec<T>, Error> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Option<String>> = self.pool.mget(keys).await?;

        values
            .into_iter()
            .flatten()
            .map(|value| serde_json::from_str(&value).map_err(Error::from))
            .collect()
    }
}

#[async_trait]
impl MovieCache for RedisMovieCache {
    async fn set_movies(&self, movies: Vec<CachedMovie>) -> Result<(), Error> {
        let mut args = Vec::with_capacity(2 + movies.len() * 3);
        args.push(self.keys.movie_prefix());
        args.push(self.keys.characters_prefix());

        for movie in &movies {
            args.push(movie.id.to_string());
            args.push(movie.release_date.num_days_from_ce().to_string());
            args.push(serde_json::to_string(movie)?);
        }

        let written: i64 = self
            .pool
            .eval(REPLACE_MOVIES_SCRIPT, vec![self.keys.movie_index()], args)
            .await?;

        tracing::debug!(written, "Replaced cached movies");

        Ok(())
    }

    async fn set_characters_by_movie_id(
        &self,
        movie_id: i64,
        characters: Vec<CachedCharacter>,
    ) -> Result<(), Error> {
        let mut args = Vec::with_capacity(1 + characters.len() * 2);
        args.push(self.keys.character_prefix(movie_id));

        for character in &characters {
            args.push(character.character_id.to_string());
            args.push(serde_json::to_string(character)?);
        }

        let written: i64 = self
            .pool
            .eval(
                REPLACE_CHARACTERS_SCRIPT,
                vec![self.keys.movie_characters(movie_id)],
                args,
            )
            .await?;

        tracing::debug!(movie_id, written, "Replaced cached characters");

        Ok(())
    }

    async fn get_movies(&self, pagination: Pagination) -> Result<MoviePage, Error> {
        let index_key = self.keys.movie_index();
        let total: u64 = self.pool.zcard(&index_key).await?;

        let start = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
        let stop = start.saturating_add(pagination.page_size() as i64 - 1);

        let movie_ids: Vec<String> = self
            .pool
            .zrange(&index_key, start, stop, None, false, None, false)
            .await?;

        let movie_keys = movie_ids
            .iter()
            .filter_map(|movie_id| movie_id.parse().ok())
            .map(|movie_id| self.keys.movie(movie_id))
            .collect();

        let movies = self.get_many(movie_keys).await?;

        Ok(MoviePage { movies, total })
    }

    async fn get_movie_by_id(&self, movie_id: i64) -> Result<Option<CachedMovie>, Error> {
        let value: Option<String> = self.pool.get(self.keys.movie(movie_id)).await?;

        match value {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    async fn get_characters_by_movie_id(
        &self,
        movie_id: i64,
        query: &CharacterQuery,
    ) -> Result<CharacterSearch, Error> {
        let character_ids: Vec<String> = self
            .pool
            .smembers(self.keys.movie_characters(movie_id))
            .await?;

        let character_keys = character_ids
            .iter()
            .filter_map(|character_id| character_id.parse().ok())
            .map(|character_id| self.keys.character(movie_id, character_id))
            .collect();

        let characters = self.get_many(character_keys).await?;

        Ok(search_characters(characters, query))
    }
}
