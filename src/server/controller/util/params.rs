//! Path and query parameter parsing shared by the controllers.

use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::ValidationError,
    model::character::{CharacterQuery, Gender, SortKey, SortOrder},
    util::pagination::Pagination,
};

/// Page selection, non-numeric values fall back to the defaults
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number, defaults to 1
    pub page: Option<String>,
    /// Items per page, defaults to 10, at most 100
    pub page_size: Option<String>,
}

impl PaginationParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_params(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// Character listing options
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CharacterParams {
    /// 1-based page number, defaults to 1
    pub page: Option<String>,
    /// Items per page, defaults to 10, at most 100
    pub page_size: Option<String>,
    /// One of `name` or `height`, characters are ordered by id when absent
    pub sort_key: Option<String>,
    /// One of `asc` or `desc`, defaults to `asc`
    pub sort_order: Option<String>,
    /// One of `male` or `female`
    pub gender: Option<String>,
}

impl CharacterParams {
    /// Validate the options, empty values are treated as absent
    pub fn query(&self) -> Result<CharacterQuery, ValidationError> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Ok(CharacterQuery {
            pagination: Pagination::from_params(self.page.as_deref(), self.page_size.as_deref()),
            sort_key: present(&self.sort_key)
                .map(|v| v.parse::<SortKey>())
                .transpose()?,
            sort_order: present(&self.sort_order)
                .map(|v| v.parse::<SortOrder>())
                .transpose()?
                .unwrap_or_default(),
            gender: present(&self.gender)
                .map(|v| v.parse::<Gender>())
                .transpose()?,
        })
    }
}

/// Unwrap query parameters, turning extractor rejections into a [`ValidationError`]
pub fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ValidationError> {
    params
        .map(|Query(params)| params)
        .map_err(|e| ValidationError::InvalidQuery(e.body_text()))
}

/// Parse a movie id path segment, which must be a positive integer
pub fn parse_movie_id(raw: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidMovieId(raw.to_string());

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<i64>() {
        Ok(movie_id) if movie_id > 0 => Ok(movie_id),
        _ => Err(invalid()),
    }
}
