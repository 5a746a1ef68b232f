use chrono::{DateTime, NaiveDate, Utc};
use swapi::model::{Film, Person};

use crate::constant::FIXTURE_SWAPI_URL;

/// Create a mock film referencing the given people.
///
/// Films are released one year apart in order of their id, starting in 1977, so listings
/// ordered by release date follow the film id.
pub fn mock_film(film_id: i64, character_ids: &[i64]) -> Film {
    let release_year = 1976 + film_id as i32;

    Film {
        title: format!("Episode {}", film_id),
        episode_id: film_id as i32,
        opening_crawl: "It is a period of civil war.".to_string(),
        director: "George Lucas".to_string(),
        producer: "Gary Kurtz, Rick McCallum".to_string(),
        release_date: NaiveDate::from_ymd_opt(release_year, 5, 25).unwrap(),
        characters: character_ids
            .iter()
            .map(|id| format!("{}/people/{}/", FIXTURE_SWAPI_URL, id))
            .collect(),
        created: mock_timestamp(),
        edited: mock_timestamp(),
        url: format!("{}/films/{}/", FIXTURE_SWAPI_URL, film_id),
    }
}

/// Create a mock person with the given height in centimeters
pub fn mock_person(person_id: i64, height: &str) -> Person {
    Person {
        name: format!("Person {}", person_id),
        height: height.to_string(),
        gender: "male".to_string(),
        url: format!("{}/people/{}/", FIXTURE_SWAPI_URL, person_id),
    }
}

/// Create a mock person with explicit name and gender
pub fn mock_named_person(person_id: i64, name: &str, gender: &str, height: &str) -> Person {
    Person {
        name: name.to_string(),
        gender: gender.to_string(),
        ..mock_person(person_id, height)
    }
}

fn mock_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2014-12-10T14:23:31.880000Z")
        .unwrap()
        .with_timezone(&Utc)
}
