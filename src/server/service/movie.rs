use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::{CharacterDto, CharacterListDto},
        movie::MovieDto,
    },
    server::{
        data::{cache::MovieCache, comment::CommentRepository},
        error::{movie::MovieError, Error},
        model::{character::CharacterQuery, movie::CachedMovie},
        util::{height::feet_inches, pagination::Pagination},
    },
};

pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn MovieCache,
}

impl<'a> MovieService<'a> {
    /// Creates a new instance of [`MovieService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn MovieCache) -> Self {
        Self { db, cache }
    }

    /// Get a page of movies ordered by release date with their comment counts
    ///
    /// # Returns
    /// - `Ok((movies, total))`: the page and the number of cached movies
    /// - `Err(Error)`: the cache or a comment count could not be read
    pub async fn list_movies(&self, pagination: Pagination) -> Result<(Vec<MovieDto>, u64), Error> {
        let comment_repo = CommentRepository::new(self.db);
        let page = self.cache.get_movies(pagination).await?;

        let mut movies = Vec::with_capacity(page.movies.len());
        for movie in page.movies {
            let comment_count = comment_repo.count_by_movie_id(movie.id).await?;
            movies.push(movie.into_dto(comment_count));
        }

        Ok((movies, page.total))
    }

    /// Get a single movie with its comment count
    ///
    /// # Returns
    /// - `Ok(MovieDto)`: the cached movie
    /// - `Err(Error::MovieError(MovieError::NotFound))`: the movie is not cached
    pub async fn get_movie(&self, movie_id: i64) -> Result<MovieDto, Error> {
        let comment_repo = CommentRepository::new(self.db);
        let movie = self.find_movie(movie_id).await?;

        let comment_count = comment_repo.count_by_movie_id(movie_id).await?;

        Ok(movie.into_dto(comment_count))
    }

    /// Get a page of a movie's characters with heights converted to feet and inches
    ///
    /// Totals cover every character matching the gender filter, not just the page.
    ///
    /// # Returns
    /// - `Ok(CharacterListDto)`: the page with totals
    /// - `Err(Error::MovieError(MovieError::NotFound))`: the movie is not cached
    /// - `Err(Error::MovieError(MovieError::NoCharacters))`: no character matches the filter
    pub async fn list_characters(
        &self,
        movie_id: i64,
        query: CharacterQuery,
    ) -> Result<CharacterListDto, Error> {
        self.find_movie(movie_id).await?;

        let search = self
            .cache
            .get_characters_by_movie_id(movie_id, &query)
            .await?;

        if search.total == 0 {
            return Err(MovieError::NoCharacters(movie_id).into());
        }

        let characters = search
            .characters
            .into_iter()
            .map(|character| {
                let (height_ft, height_in) = feet_inches(character.height_cm);

                CharacterDto {
                    id: character.character_id,
                    name: character.name,
                    gender: character.gender,
                    height_cm: character.height_cm,
                    height_ft,
                    height_in,
                }
            })
            .collect();

        let (total_ft, total_in) = feet_inches(search.total_height_cm);

        Ok(CharacterListDto {
            characters,
            total_count: search.total,
            total_cm: search.total_height_cm,
            total_ft,
            total_in,
        })
    }

    /// Get a cached movie or fail with [`MovieError::NotFound`]
    pub async fn find_movie(&self, movie_id: i64) -> Result<CachedMovie, Error> {
        self.cache
            .get_movie_by_id(movie_id)
            .await?
            .ok_or_else(|| MovieError::NotFound(movie_id).into())
    }
}
