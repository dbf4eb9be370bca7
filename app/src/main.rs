//! Prism server entry point

use anyhow::Result;
use prism_api::AppState;
use prism_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.api_port;
    tracing::info!(
        upstream = %config.aggregator.base_url,
        port,
        "Starting Prism"
    );

    let state = AppState::new(config);
    prism_api::start_server(state, port).await?;

    Ok(())
}
