use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Error, id::resolve_id};

/// A page of a SWAPI collection resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    /// Resource URLs of the people appearing in the film
    pub characters: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub url: String,
}

impl Film {
    pub fn id(&self) -> Result<i64, Error> {
        resolve_id(&self.url, "films")
    }

    /// Resolve every character reference of the film, failing on the first unresolvable URL.
    pub fn character_ids(&self) -> Result<Vec<i64>, Error> {
        self.characters
            .iter()
            .map(|url| resolve_id(url, "people"))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Height in centimeters as reported by SWAPI, may be `"unknown"`
    pub height: String,
    pub gender: String,
    pub url: String,
}

/// Upper bound for a reported height, well above any real character
pub const MAX_HEIGHT_CM: i64 = 100_000;

impl Person {
    pub fn id(&self) -> Result<i64, Error> {
        resolve_id(&self.url, "people")
    }

    /// Height in whole centimeters, `0` when SWAPI does not report a numeric height.
    ///
    /// Values are clamped to `0..=MAX_HEIGHT_CM`.
    pub fn height_cm(&self) -> i64 {
        self.height
            .trim()
            .replace(',', "")
            .parse::<i64>()
            .map_or(0, |height| height.clamp(0, MAX_HEIGHT_CM))
    }
}
