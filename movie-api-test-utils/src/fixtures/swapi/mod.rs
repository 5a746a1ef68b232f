use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn swapi(&mut self) -> SwapiFixtures<'_> {
        SwapiFixtures { test: self }
    }
}

pub struct SwapiFixtures<'a> {
    test: &'a mut TestContext,
}
