use url::Url;

use crate::error::Error;

/// Resolve the numeric id that follows `segment` in a SWAPI resource URL.
///
/// `https://swapi.dev/api/films/1/` resolved with segment `films` yields `1`. Trailing slashes,
/// extra path segments after the id, and query strings are ignored.
///
/// # Errors
/// - [`Error::InvalidResourceUrl`] if the URL cannot be parsed, the segment is missing, or the
///   segment is not followed by a base-10 integer
pub fn resolve_id(resource_url: &str, segment: &str) -> Result<i64, Error> {
    let invalid = |reason: &str| Error::InvalidResourceUrl {
        url: resource_url.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(resource_url).map_err(|e| invalid(&e.to_string()))?;
    let mut segments = url
        .path_segments()
        .ok_or_else(|| invalid("URL has no path"))?;

    if !segments.any(|s| s == segment) {
        return Err(invalid(&format!("missing \"{}\" path segment", segment)));
    }

    let raw_id = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(&format!("no id after \"{}\"", segment)))?;

    if !raw_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(&format!("{:?} is not a numeric id", raw_id)));
    }

    raw_id.parse::<i64>().map_err(|e| invalid(&e.to_string()))
}
