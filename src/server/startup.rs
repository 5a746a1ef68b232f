use std::sync::Arc;

use crate::server::{
    config::Config,
    data::cache::{MovieCache, RedisMovieCache},
    error::Error,
};

/// Build the SWAPI client for the configured base URL
pub fn build_catalog_client(config: &Config) -> Result<swapi::Client, Error> {
    let catalog = swapi::Client::builder()
        .base_url(&config.swapi_url)
        .build()?;

    Ok(catalog)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Redis and build the movie cache
pub async fn connect_to_cache(config: &Config) -> Result<Arc<dyn MovieCache>, Error> {
    use fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let redis_config = RedisConfig::from_url(&config.redis_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let cache = RedisMovieCache::with_namespace(pool, config.cache_namespace.as_deref());

    Ok(Arc::new(cache))
}
