//! Futures analysis API server
//!
//! Serves quote snapshots, indicator computations and trend verdicts as JSON.
//! The service context is built once here and passed to the router.

use dotenvy::dotenv;
use futures_analysis::config::Config;
use futures_analysis::core::http::{start_server, AppState};
use futures_analysis::logging;
use futures_analysis::services::{EastmoneyProvider, MarketDataProvider};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env();
    logging::init_logging(&config);

    info!("Starting futures analysis API server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        base_url = %config.provider.base_url,
        block = %config.provider.block,
        fallback_to_sample = config.provider.fallback_to_sample,
        "Quote provider"
    );

    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(EastmoneyProvider::new(config.provider.clone())?);
    let state = AppState::new(config, provider)?;

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
