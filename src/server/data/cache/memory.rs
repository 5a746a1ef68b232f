use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{search_characters, MovieCache, MoviePage};
use crate::server::{
    error::Error,
    model::{
        character::{CachedCharacter, CharacterQuery, CharacterSearch},
        movie::CachedMovie,
    },
    util::pagination::Pagination,
};

/// In-process [`MovieCache`], used where no Redis server is available.
#[derive(Default)]
pub struct MemoryMovieCache {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    movies: BTreeMap<i64, CachedMovie>,
    characters: HashMap<i64, Vec<CachedCharacter>>,
}

impl MemoryMovieCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieCache for MemoryMovieCache {
    async fn set_movies(&self, movies: Vec<CachedMovie>) -> Result<(), Error> {
        let movies: BTreeMap<i64, CachedMovie> =
            movies.into_iter().map(|movie| (movie.id, movie)).collect();

        let mut state = self.state.write().await;

        let dropped: Vec<i64> = state
            .movies
            .keys()
            .filter(|movie_id| !movies.contains_key(movie_id))
            .copied()
            .collect();
        for movie_id in dropped {
            state.characters.remove(&movie_id);
        }

        state.movies = movies;

        Ok(())
    }

    async fn set_characters_by_movie_id(
        &self,
        movie_id: i64,
        characters: Vec<CachedCharacter>,
    ) -> Result<(), Error> {
        self.state
            .write()
            .await
            .characters
            .insert(movie_id, characters);

        Ok(())
    }

    async fn get_movies(&self, pagination: Pagination) -> Result<MoviePage, Error> {
        let state = self.state.read().await;

        let mut movies: Vec<&CachedMovie> = state.movies.values().collect();
        movies.sort_by_key(|movie| (movie.release_date, movie.id));

        Ok(MoviePage {
            movies: pagination.slice(&movies).iter().map(|&m| m.clone()).collect(),
            total: movies.len() as u64,
        })
    }

    async fn get_movie_by_id(&self, movie_id: i64) -> Result<Option<CachedMovie>, Error> {
        Ok(self.state.read().await.movies.get(&movie_id).cloned())
    }

    async fn get_characters_by_movie_id(
        &self,
        movie_id: i64,
        query: &CharacterQuery,
    ) -> Result<CharacterSearch, Error> {
        let characters = self
            .state
            .read()
            .await
            .characters
            .get(&movie_id)
            .cloned()
            .unwrap_or_default();

        Ok(search_characters(characters, query))
    }
}
