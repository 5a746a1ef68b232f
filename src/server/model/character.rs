use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::server::{error::validation::ValidationError, util::pagination::Pagination};

/// A character as stored in the movie cache, one entry per (movie, character) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedCharacter {
    pub movie_id: i64,
    pub character_id: i64,
    pub name: String,
    pub gender: String,
    pub height_cm: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Height,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "height" => Ok(Self::Height),
            _ => Err(ValidationError::InvalidSortKey(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValidationError::InvalidSortOrder(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn matches(&self, gender: &str) -> bool {
        gender.eq_ignore_ascii_case(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ValidationError::InvalidGender(value.to_string())),
        }
    }
}

/// Filter, ordering and page applied to a movie's cached characters.
///
/// Without a sort key characters are ordered by character id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterQuery {
    pub pagination: Pagination,
    pub sort_key: Option<SortKey>,
    pub sort_order: SortOrder,
    pub gender: Option<Gender>,
}

impl CharacterQuery {
    pub fn compare(&self, a: &CachedCharacter, b: &CachedCharacter) -> Ordering {
        let ordering = match self.sort_key {
            Some(SortKey::Name) => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.character_id.cmp(&b.character_id)),
            Some(SortKey::Height) => a
                .height_cm
                .cmp(&b.height_cm)
                .then(a.character_id.cmp(&b.character_id)),
            None => a.character_id.cmp(&b.character_id),
        };

        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// A page of characters matching a [`CharacterQuery`] with totals over the full match set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSearch {
    pub characters: Vec<CachedCharacter>,
    pub total: u64,
    pub total_height_cm: i64,
}
