//! SWAPI mock endpoint creation utilities.

use mockito::Mock;
use swapi::model::{Film, Page, Person};

use crate::fixtures::swapi::SwapiFixtures;

impl<'a> SwapiFixtures<'a> {
    /// Create a mock endpoint at `/films/` returning all films in a single page.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_films_endpoint(&mut self, films: Vec<Film>, expected_requests: usize) -> Mock {
        let page = Page {
            count: films.len() as u64,
            next: None,
            previous: None,
            results: films,
        };

        self.test
            .server
            .mock("GET", "/films/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&page).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/films/` answering with `status_code`
    pub fn create_films_error_endpoint(
        &mut self,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.test
            .server
            .mock("GET", "/films/")
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/people/{person_id}/` returning `person`
    pub fn create_person_endpoint(
        &mut self,
        person_id: i64,
        person: Person,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/people/{}/", person_id);

        self.test
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&person).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/people/{person_id}/` answering with `status_code`
    pub fn create_person_error_endpoint(
        &mut self,
        person_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/people/{}/", person_id);

        self.test
            .server
            .mock("GET", url.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
