use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_api::server::{
    config::Config, error::Error, model::app::AppState, router, scheduler::RefreshScheduler,
    startup,
};

const DEFAULT_LOG_FILTER: &str = "movie_api=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let catalog = startup::build_catalog_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await?;

    RefreshScheduler::new(cache.clone(), catalog).spawn();

    let app = router::routes()
        .with_state(AppState { db, cache })
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
