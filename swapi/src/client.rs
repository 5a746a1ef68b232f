use std::{sync::Arc, time::Duration};

use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::Error,
    model::{Film, Page, Person},
};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_USER_AGENT: &str = concat!("movie-api/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on in-flight person requests issued by [`Client::get_people`]
pub const MAX_CONCURRENT_PERSON_FETCHES: usize = 5;

/// Cheaply cloneable SWAPI client, clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientRef>,
}

#[derive(Debug)]
struct ClientRef {
    http: reqwest::Client,
    base_url: String,
}

pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Fetch every film, following the `next` link of each page until the last one.
    pub async fn get_films(&self) -> Result<Vec<Film>, Error> {
        let mut films = Vec::new();
        let mut next = Some(format!("{}/films/", self.inner.base_url));

        while let Some(url) = next.take() {
            let page: Page<Film> = self.get_json(&url).await?;
            films.extend(page.results);

            next = page.next.filter(|next_url| *next_url != url);
        }

        Ok(films)
    }

    pub async fn get_person(&self, person_id: i64) -> Result<Person, Error> {
        let url = format!("{}/people/{}/", self.inner.base_url, person_id);

        self.get_json(&url).await
    }

    /// Fetch the given people with at most [`MAX_CONCURRENT_PERSON_FETCHES`] requests in flight.
    ///
    /// Every id is attempted before returning. If any request fails the failures are logged
    /// and [`Error::PartialFetch`] is returned listing the ids that could not be fetched.
    pub async fn get_people(&self, person_ids: &[i64]) -> Result<Vec<Person>, Error> {
        let results: Vec<(i64, Result<Person, Error>)> = stream::iter(person_ids.iter().copied())
            .map(|person_id| async move { (person_id, self.get_person(person_id).await) })
            .buffer_unordered(MAX_CONCURRENT_PERSON_FETCHES)
            .collect()
            .await;

        let mut people = Vec::with_capacity(results.len());
        let mut failed = Vec::new();

        for (person_id, result) in results {
            match result {
                Ok(person) => people.push(person),
                Err(e) => {
                    tracing::warn!(person_id, error = %e, "Failed to fetch person");
                    failed.push(person_id);
                }
            }
        }

        if !failed.is_empty() {
            failed.sort_unstable();

            return Err(Error::PartialFetch {
                failed,
                fetched: people.len(),
            });
        }

        Ok(people)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        tracing::debug!(url, "SWAPI request");

        let response = self.inner.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Root of the API, e.g. `https://swapi.dev/api`, without the resource path
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Client {
            inner: Arc::new(ClientRef {
                http,
                base_url: self.base_url,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
