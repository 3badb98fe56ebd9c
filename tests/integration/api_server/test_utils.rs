//! Test utilities for API server integration tests

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use futures_analysis::config::Config;
use futures_analysis::core::http::{create_router, AppState};
use futures_analysis::metrics::Metrics;
use futures_analysis::models::Quote;
use futures_analysis::services::{MarketDataProvider, ProviderError, SampleDataProvider};
use serde_json::{json, Value};

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    /// Server backed by the fixed sample snapshot.
    pub async fn new() -> Self {
        Self::with_provider(Config::default(), Arc::new(SampleDataProvider)).await
    }

    pub async fn with_provider(config: Config, provider: Arc<dyn MarketDataProvider>) -> Self {
        let state = AppState::new(config, provider).expect("metrics initialization");
        let metrics = state.metrics.clone();

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

/// Provider whose upstream is always down.
pub struct UnavailableProvider;

#[async_trait]
impl MarketDataProvider for UnavailableProvider {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, ProviderError> {
        Err(ProviderError::Status(503))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// `count` JSON bars on a steady 10-point climb from 9000.
#[allow(dead_code)]
pub fn rising_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let close = 9000.0 + 10.0 * i as f64;
            json!({
                "symbol": "AP601",
                "open": close - 5.0,
                "high": close + 15.0,
                "low": close - 15.0,
                "close": close,
                "volume": 1000.0,
            })
        })
        .collect()
}
