//! Declarative test builder.
//!
//! All configuration is queued on the builder and applied in the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use swapi::model::{Film, Person};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up the database tables, comment fixtures and SWAPI mock
/// endpoints a test needs. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert, (movie_id, message)
    comments: Vec<(i64, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    films_endpoints: Vec<(Vec<Film>, usize)>,
    person_endpoints: Vec<(i64, Person, usize)>,
    person_error_endpoints: Vec<(i64, usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            comments: Vec::new(),
            mock_builders: Vec::new(),
            films_endpoints: Vec::new(),
            person_endpoints: Vec::new(),
            person_error_endpoints: Vec::new(),
        }
    }

    /// Add the comment table to the test database.
    pub fn with_comment_table(self) -> Self {
        self.with_table(entity::prelude::Comment)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a comment for `movie_id` into the database.
    ///
    /// Requires the comment table, see [`TestBuilder::with_comment_table`].
    pub fn with_mock_comment(mut self, movie_id: i64, message: impl Into<String>) -> Self {
        self.comments.push((movie_id, message.into()));
        self
    }

    /// Add a mock `/films/` endpoint returning `films` in a single page.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_films_endpoint(mut self, films: Vec<Film>, expected_requests: usize) -> Self {
        self.films_endpoints.push((films, expected_requests));
        self
    }

    /// Add a mock `/people/{person_id}/` endpoint returning `person`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_person_endpoint(
        mut self,
        person_id: i64,
        person: Person,
        expected_requests: usize,
    ) -> Self {
        self.person_endpoints
            .push((person_id, person, expected_requests));
        self
    }

    /// Add a mock `/people/{person_id}/` endpoint answering with an error status.
    pub fn with_person_error_endpoint(
        mut self,
        person_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.person_error_endpoints
            .push((person_id, status_code, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::SwapiError)` - Mock SWAPI client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // 1. Create tables
        test.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for (movie_id, message) in self.comments {
            test.comment().insert_mock_comment(movie_id, &message).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so a test can queue an error response ahead of
        // a success response on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for (films, expected) in self.films_endpoints {
            mocks.push(test.swapi().create_films_endpoint(films, expected));
        }

        for (person_id, person, expected) in self.person_endpoints {
            mocks.push(
                test.swapi()
                    .create_person_endpoint(person_id, person, expected),
            );
        }

        for (person_id, status_code, expected) in self.person_error_endpoints {
            mocks.push(
                test.swapi()
                    .create_person_error_endpoint(person_id, status_code, expected),
            );
        }

        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
