use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request failed or the response body could not be decoded
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// SWAPI answered with a non-success status
    #[error("SWAPI request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    /// A resource URL did not contain the expected `<segment>/<id>` pair
    #[error("Failed to resolve id from resource URL {url:?}: {reason}")]
    InvalidResourceUrl { url: String, reason: String },
    /// Some of the requested people could not be fetched
    #[error("Failed to fetch {} of {} people: {failed:?}", failed.len(), failed.len() + fetched)]
    PartialFetch { failed: Vec<i64>, fetched: usize },
    /// Client configuration was invalid
    #[error("Invalid SWAPI client configuration: {0}")]
    Config(String),
}
