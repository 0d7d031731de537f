mod config;
mod fetcher;
mod models;
mod pipeline;
mod presentation;
mod processor;

use config::AppConfig;
use fetcher::RemoteFetcher;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Fetching latest earthquake from {}", config.usgs_request_url);

    let fetcher = Arc::new(RemoteFetcher::new(
        &config.usgs_request_url,
        config.timeouts(),
    )?);

    if let Some(url) = fetcher.effective_url() {
        info!("Effective request URL: {}", url);
    }

    match pipeline::spawn_pipeline(fetcher).await {
        Ok(Ok(lookup)) => {
            info!("Earthquake available: {}", lookup.is_found());
            let view = presentation::EarthquakeView::from_lookup(&lookup);
            println!("{}", presentation::render(&view));
        }
        Ok(Err(e)) => {
            // Screen stays in its pre-fetch state.
            error!("Earthquake fetch failed: {}", e);
        }
        Err(_) => {
            anyhow::bail!("pipeline worker exited without a result");
        }
    }

    Ok(())
}
