//! Searchable store for the movies and characters mirrored from SWAPI.
//!
//! The catalog refresh is the only writer. Every write replaces the previous content of the
//! affected movie set or character list as a whole, readers never observe a partial update.

mod keys;
mod lua;
pub mod memory;
pub mod redis;

pub use keys::CacheKeys;
pub use memory::MemoryMovieCache;
pub use redis::RedisMovieCache;

use async_trait::async_trait;

use crate::server::{
    error::Error,
    model::{
        character::{CachedCharacter, CharacterQuery, CharacterSearch},
        movie::CachedMovie,
    },
    util::pagination::Pagination,
};

/// A page of cached movies ordered by release date
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviePage {
    pub movies: Vec<CachedMovie>,
    /// Number of cached movies across all pages
    pub total: u64,
}

#[async_trait]
pub trait MovieCache: Send + Sync {
    /// Replace the full set of cached movies.
    async fn set_movies(&self, movies: Vec<CachedMovie>) -> Result<(), Error>;

    /// Replace the cached characters of a single movie.
    async fn set_characters_by_movie_id(
        &self,
        movie_id: i64,
        characters: Vec<CachedCharacter>,
    ) -> Result<(), Error>;

    async fn get_movies(&self, pagination: Pagination) -> Result<MoviePage, Error>;

    async fn get_movie_by_id(&self, movie_id: i64) -> Result<Option<CachedMovie>, Error>;

    /// Filter, sort and paginate the cached characters of a movie.
    async fn get_characters_by_movie_id(
        &self,
        movie_id: i64,
        query: &CharacterQuery,
    ) -> Result<CharacterSearch, Error>;
}

/// Apply a [`CharacterQuery`] to the full character list of a movie.
///
/// Totals are computed over every character passing the gender filter, not just the page.
pub(crate) fn search_characters(
    mut characters: Vec<CachedCharacter>,
    query: &CharacterQuery,
) -> CharacterSearch {
    if let Some(gender) = query.gender {
        characters.retain(|c| gender.matches(&c.gender));
    }

    characters.sort_by(|a, b| query.compare(a, b));

    let total = characters.len() as u64;
    let total_height_cm = characters
        .iter()
        .fold(0i64, |total, c| total.saturating_add(c.height_cm));

    CharacterSearch {
        characters: query.pagination.slice(&characters).to_vec(),
        total,
        total_height_cm,
    }
}
