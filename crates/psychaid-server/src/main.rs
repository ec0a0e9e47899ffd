use std::sync::Arc;

use psychaid_analysis::NarrativeSelector;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let selector = NarrativeSelector::from_config(&config.narrative).await;
    tracing::info!(
        external_provider = selector.has_external_provider(),
        "psychaid server starting"
    );

    let state = AppState {
        selector: Arc::new(selector),
        styles: Arc::new(config.styles),
    };

    lambda_http::run(routes::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
