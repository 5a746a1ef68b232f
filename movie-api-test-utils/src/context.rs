//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test environment built by [`TestBuilder`](crate::TestBuilder)
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_comment_table()
///     .with_films_endpoint(vec![factory::mock_film(1, &[1])], 1)
///     .build()
///     .await?;
///
/// let comment = test.comment().insert_mock_comment(1, "Great").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// SWAPI client configured to use the mock server
    pub catalog: swapi::Client,

    /// Mock HTTP server standing in for SWAPI
    pub(crate) server: ServerGuard,
    /// Mock endpoints created by the builder, kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let catalog = swapi::Client::builder()
            .base_url(&server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            catalog,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock SWAPI server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
