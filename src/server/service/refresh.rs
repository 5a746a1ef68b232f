//! Catalog refresh: mirrors SWAPI films and their characters into the movie cache.
//!
//! A refresh cycle lists every film, resolves the numeric ids embedded in the film and
//! character resource URLs, fetches each distinct character once in batches and stores it
//! under every movie referencing it. The movie set is written last so a movie only becomes
//! visible together with its characters.
//!
//! Failures while listing films or resolving their ids abort the cycle before anything is
//! written. Failed character batches are logged and skipped; a movie referencing any character
//! of a failed batch is not rewritten and keeps whatever the cache held before. Failed
//! per-movie writes are logged and counted.

use std::collections::{BTreeMap, BTreeSet};

use swapi::model::Film;

use crate::server::{
    data::cache::MovieCache,
    error::Error,
    model::{character::CachedCharacter, movie::CachedMovie},
};

/// Number of distinct characters requested from SWAPI per batch
pub const CHARACTER_BATCH_SIZE: usize = 10;

/// Outcome of a refresh cycle that reached the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Movies written to the cache
    pub movies: usize,
    /// Character entries written, a character shared by two movies counts twice
    pub characters: usize,
    /// Character batches skipped because at least one fetch failed
    pub failed_batches: usize,
    /// Movies whose character list could not be written
    pub failed_writes: usize,
    /// Movies left untouched because some of their characters were in a failed batch
    pub incomplete_movies: usize,
}

/// Films with every embedded id resolved
struct ResolvedCatalog {
    movies: Vec<CachedMovie>,
    /// Movie id to the distinct character ids it references
    references: BTreeMap<i64, Vec<i64>>,
    /// Character id to the movies referencing it
    owners: BTreeMap<i64, Vec<i64>>,
}

impl ResolvedCatalog {
    fn resolve(films: &[Film]) -> Result<Self, swapi::Error> {
        let mut movies = Vec::with_capacity(films.len());
        let mut references = BTreeMap::new();
        let mut owners: BTreeMap<i64, Vec<i64>> = BTreeMap::new();

        for film in films {
            let movie_id = film.id()?;

            let mut seen = BTreeSet::new();
            let character_ids: Vec<i64> = film
                .character_ids()?
                .into_iter()
                .filter(|character_id| seen.insert(*character_id))
                .collect();

            for &character_id in &character_ids {
                owners.entry(character_id).or_default().push(movie_id);
            }

            references.insert(movie_id, character_ids);
            movies.push(CachedMovie::from_film(movie_id, film));
        }

        Ok(Self {
            movies,
            references,
            owners,
        })
    }

    /// Every distinct character id across all films, ascending
    fn character_ids(&self) -> Vec<i64> {
        self.owners.keys().copied().collect()
    }
}

pub struct CatalogRefreshService<'a> {
    catalog: &'a swapi::Client,
    cache: &'a dyn MovieCache,
}

impl<'a> CatalogRefreshService<'a> {
    /// Creates a new instance of [`CatalogRefreshService`]
    pub fn new(catalog: &'a swapi::Client, cache: &'a dyn MovieCache) -> Self {
        Self { catalog, cache }
    }

    /// Run one refresh cycle.
    ///
    /// # Returns
    /// - `Ok(RefreshReport)`: every character batch was attempted and the movie set was replaced
    /// - `Err(Error::CatalogError(_))`: films could not be listed or a film or character
    ///   reference URL could not be resolved, the cache was not modified
    /// - `Err(_)`: the movie set could not be written to the cache
    pub async fn refresh(&self) -> Result<RefreshReport, Error> {
        let films = self.catalog.get_films().await?;
        let catalog = ResolvedCatalog::resolve(&films)?;

        let mut report = RefreshReport::default();
        let mut characters_by_movie: BTreeMap<i64, Vec<CachedCharacter>> = BTreeMap::new();
        let mut failed_ids = BTreeSet::new();

        let character_ids = catalog.character_ids();
        for batch in character_ids.chunks(CHARACTER_BATCH_SIZE) {
            let people = match self.catalog.get_people(batch).await {
                Ok(people) => people,
                Err(e) => {
                    tracing::warn!(batch = ?batch, "Skipping character batch: {}", e);
                    report.failed_batches += 1;
                    failed_ids.extend(batch.iter().copied());
                    continue;
                }
            };

            for person in people {
                let character_id = match person.id() {
                    Ok(character_id) => character_id,
                    Err(e) => {
                        tracing::warn!(name = %person.name, "Skipping character: {}", e);
                        continue;
                    }
                };

                let Some(movie_ids) = catalog.owners.get(&character_id) else {
                    tracing::warn!(
                        character_id,
                        "Skipping character not referenced by any film"
                    );
                    continue;
                };

                let height_cm = person.height_cm();
                for &movie_id in movie_ids {
                    characters_by_movie
                        .entry(movie_id)
                        .or_default()
                        .push(CachedCharacter {
                            movie_id,
                            character_id,
                            name: person.name.clone(),
                            gender: person.gender.clone(),
                            height_cm,
                        });
                }
            }
        }

        for (movie_id, references) in &catalog.references {
            if references.iter().any(|id| failed_ids.contains(id)) {
                tracing::warn!(movie_id, "Keeping cached characters, some could not be fetched");
                characters_by_movie.remove(movie_id);
                report.incomplete_movies += 1;
            } else if references.is_empty() {
                // Films without any character reference still get their stale entries cleared
                characters_by_movie.entry(*movie_id).or_default();
            }
        }

        for (movie_id, characters) in characters_by_movie {
            let count = characters.len();

            match self
                .cache
                .set_characters_by_movie_id(movie_id, characters)
                .await
            {
                Ok(()) => report.characters += count,
                Err(e) => {
                    tracing::error!(movie_id, "Failed to cache characters: {}", e);
                    report.failed_writes += 1;
                }
            }
        }

        report.movies = catalog.movies.len();
        self.cache.set_movies(catalog.movies).await?;

        Ok(report)
    }
}
