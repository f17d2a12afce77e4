// Main entry point for the run-once listing collector

mod config;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use listings::{aggregate, sink, sources, HttpFetcher, PostgresStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listings=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting listing collector");

    let config = Config::from_env().context("Failed to load configuration")?;

    // The store handle is the one thing the run cannot proceed without
    let store = PostgresStore::new(&config.database_url)
        .await
        .context("Failed to initialize product store")?;
    tracing::info!("Product store ready");

    let mut fetcher = HttpFetcher::new();
    if let Some(user_agent) = config.user_agent {
        fetcher = fetcher.with_user_agent(user_agent);
    }

    let registry = sources::all(&fetcher).context("Failed to build source registry")?;

    let products = aggregate::collect_all(&registry).await;
    let summary = sink::persist_all(&store, &products).await;

    tracing::info!(
        saved = summary.saved,
        failed = summary.failed,
        "Collector finished"
    );

    Ok(())
}
