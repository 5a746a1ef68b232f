use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::data::cache::MovieCache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: Arc<dyn MovieCache>,
}
