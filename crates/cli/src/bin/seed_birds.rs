//! Bird pool seeder
//!
//! Probes the NABU portrait index for available bird pages, then fills the
//! pool with the curated sample set. Refuses to touch a non-empty pool
//! unless told otherwise.
//!
//! Usage:
//!   cargo run --bin seed_birds                 # seed an empty pool
//!   cargo run --bin seed_birds -- --dry-run    # report without writing
//!   cargo run --bin seed_birds -- --force      # wipe existing birds first

use std::env;
use std::time::Duration;

use nabu::NabuClient;
use server::models::CreateBird;
use server::repositories::BirdRepository;
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

    let args: Vec<String> = env::args().collect();
    let force = args.iter().any(|a| a == "--force");
    let dry_run = args.iter().any(|a| a == "--dry-run");

    let app_env = Environment::from_str(&env::var("APP_ENV").unwrap_or_default());
    let data_path = env::var("DATA_PATH")
        .unwrap_or_else(|_| app_env.default_data_path().to_string_lossy().to_string());
    let config = Config::new(app_env, &data_path);

    std::fs::create_dir_all(&config.data_path)?;
    let pool = create_pool(&config.database_url).await?;

    // Portrait discovery is advisory only; seeding works offline too.
    let http_client = reqwest::Client::builder()
        .user_agent("nettgefluester-backend")
        .timeout(Duration::from_secs(10))
        .build()?;
    match NabuClient::new(http_client).discover_portrait_links().await {
        Ok(links) => tracing::info!("NABU index lists {} bird portraits", links.len()),
        Err(e) => tracing::warn!("Could not reach the NABU portrait index: {}", e),
    }

    let existing = BirdRepository::count(&pool).await?;
    if existing > 0 && !force && !dry_run {
        tracing::error!(
            "Bird pool already holds {} birds; re-run with --force to replace them",
            existing
        );
        std::process::exit(1);
    }

    let birds = nabu::sample_birds();

    if dry_run {
        tracing::info!(
            "Dry run: would seed {} birds ({} currently in the pool)",
            birds.len(),
            existing
        );
        for bird in &birds {
            tracing::info!("  {} ({})", bird.name, bird.scientific_name);
        }
        return Ok(());
    }

    if force && existing > 0 {
        let removed = BirdRepository::delete_all(&pool).await?;
        tracing::info!("Removed {} existing birds", removed);
    }

    let mut seeded = 0;
    for record in birds {
        let bird = BirdRepository::create(
            &pool,
            CreateBird {
                name: record.name,
                scientific_name: record.scientific_name,
                description: record.description,
                image_url: record.image_url,
            },
        )
        .await?;
        tracing::info!("Seeded {} ({})", bird.name, bird.scientific_name);
        seeded += 1;
    }

    tracing::info!("Done: {} birds in the pool", seeded);

    Ok(())
}
