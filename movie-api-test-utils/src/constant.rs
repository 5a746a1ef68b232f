pub static TEST_USER_AGENT: &str = "movie-api-tests/0.1";

/// Base URL used in the resource URLs of fixture films and people
pub static FIXTURE_SWAPI_URL: &str = "https://swapi.dev/api";
