use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Catalog refresh did not complete within {0:?}")]
    Timeout(Duration),
}
