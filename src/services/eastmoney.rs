//! Eastmoney futures block-list provider.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::models::quote::Quote;
use crate::services::error::ProviderError;
use crate::services::market_data::MarketDataProvider;
use crate::services::sample::SampleDataProvider;

const BROWSER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
const QUOTE_REFERER: &str = "http://quote.eastmoney.com/";

#[derive(Debug, Deserialize)]
struct BlockListResponse {
    list: Option<Vec<RawQuote>>,
}

/// One row of the block list. Numeric fields arrive as numbers, numeric
/// strings, or `"-"` for suspended contracts; the latter reads as zero.
#[derive(Debug, Deserialize)]
struct RawQuote {
    #[serde(default)]
    dm: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    p: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    zd: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    zde: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    o: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    h: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    l: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    st: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    v: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    amt: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    oi: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

impl From<RawQuote> for Quote {
    fn from(raw: RawQuote) -> Self {
        Quote::new(raw.dm, raw.o, raw.h, raw.l, raw.p, raw.v, Utc::now())
            .with_name(raw.name)
            .with_change(raw.zd, raw.zde)
            .with_prev_settle(raw.st)
            .with_turnover(raw.amt)
            .with_open_interest(raw.oi)
    }
}

pub struct EastmoneyProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl EastmoneyProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(QUOTE_REFERER));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: ProviderConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    fn list_url(&self) -> String {
        format!("{}/list/block/{}", self.config.base_url, self.config.block)
    }

    async fn fetch_once(&self) -> Result<Vec<Quote>, ProviderError> {
        let url = self.list_url();
        debug!(url = %url, "fetching quote snapshot");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: BlockListResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))?;
        let rows = body
            .list
            .ok_or_else(|| ProviderError::Payload("missing `list` field".to_string()))?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn fetch_with_retry(&self) -> Result<Vec<Quote>, ProviderError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_times(self.config.max_retries);

        (|| self.fetch_once())
            .retry(backoff)
            .when(ProviderError::is_transient)
            .notify(|err: &ProviderError, delay: Duration| {
                warn!(error = %err, delay_ms = delay.as_millis() as u64, "retrying quote fetch");
            })
            .await
    }
}

#[async_trait]
impl MarketDataProvider for EastmoneyProvider {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, ProviderError> {
        match self.fetch_with_retry().await {
            Ok(quotes) => Ok(quotes),
            Err(e) if self.config.fallback_to_sample => {
                warn!(error = %e, "quote fetch failed, serving sample snapshot");
                Ok(SampleDataProvider::quotes())
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "eastmoney"
    }
}
