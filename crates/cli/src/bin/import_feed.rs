//! Podcast feed importer
//!
//! Fetches the Nettgeflüster RSS feed and imports new episodes into the
//! catalog. Existing episode numbers are skipped, so re-running is safe.
//!
//! Usage:
//!   cargo run --bin import_feed                      # default feed URL
//!   cargo run --bin import_feed -- <feed-url>        # custom feed URL

use std::env;

use feed::FeedClient;
use server::services::{FeedImportService, DEFAULT_FEED_URL, DEFAULT_TARGET_YEARS};
use server::{create_pool, Config, Environment};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let feed_url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

    let app_env = Environment::from_str(&env::var("APP_ENV").unwrap_or_default());
    let data_path = env::var("DATA_PATH")
        .unwrap_or_else(|_| app_env.default_data_path().to_string_lossy().to_string());
    let config = Config::new(app_env, &data_path);

    std::fs::create_dir_all(&config.data_path)?;
    let pool = create_pool(&config.database_url).await?;

    tracing::info!("Importing feed {}", feed_url);
    let service = FeedImportService::new(pool, FeedClient::new());
    let summary = service
        .import_feed(&feed_url, &DEFAULT_TARGET_YEARS)
        .await?;

    tracing::info!(
        "Import finished: {} imported, {} skipped, {} failed ({} items total)",
        summary.imported(),
        summary.skipped(),
        summary.failed(),
        summary.items.len()
    );

    Ok(())
}
