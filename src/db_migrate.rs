use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use fitdesk_db::schema::initialize_database;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let database_url = std::env::var("DATABASE_URL")
        .wrap_err("DATABASE_URL environment variable must be set")?;

    info!("Connecting to database...");
    let db_pool = fitdesk_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    Ok(())
}
