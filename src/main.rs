use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use fitdesk_api::{ApiState, config::ApiConfig, services::occupancy::OccupancyService};
use fitdesk_db::{InMemoryStore, PgStore, create_pool, schema::initialize_database};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    fitdesk_api::init_tracing(config.log_level)?;

    let (occupancy, storage) = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;

            let store = Arc::new(PgStore::new(db_pool));
            (
                OccupancyService::new(store.clone(), store.clone(), store),
                "postgres",
            )
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory storage");
            let store = Arc::new(InMemoryStore::new());
            (
                OccupancyService::new(store.clone(), store.clone(), store),
                "memory",
            )
        }
    };

    let state = Arc::new(ApiState {
        occupancy: occupancy.with_fetch_concurrency(config.fetch_concurrency),
        storage,
    });

    // Start API server
    fitdesk_api::start_server(config, state).await?;

    Ok(())
}
