use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::movie::MovieDto;

/// A film as stored in the movie cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedMovie {
    pub id: i64,
    pub title: String,
    pub episode_id: i32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CachedMovie {
    pub fn from_film(id: i64, film: &swapi::model::Film) -> Self {
        Self {
            id,
            title: film.title.clone(),
            episode_id: film.episode_id,
            opening_crawl: film.opening_crawl.clone(),
            director: film.director.clone(),
            producer: film.producer.clone(),
            release_date: film.release_date,
            created_at: film.created,
            updated_at: film.edited,
        }
    }

    pub fn into_dto(self, comment_count: u64) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            episode_id: self.episode_id,
            opening_crawl: self.opening_crawl,
            director: self.director,
            producer: self.producer,
            release_date: self.release_date,
            comment_count,
        }
    }
}
