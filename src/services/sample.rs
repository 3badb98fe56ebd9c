//! Fixed apple-futures snapshot used when no live provider is reachable.

use async_trait::async_trait;
use chrono::Utc;

use crate::models::quote::Quote;
use crate::services::error::ProviderError;
use crate::services::market_data::MarketDataProvider;

pub struct SampleDataProvider;

impl SampleDataProvider {
    pub fn quotes() -> Vec<Quote> {
        let now = Utc::now();
        // (code, name, close, change, change %, open, high, low, prev settle, volume, turnover, open interest)
        let rows: [(&str, &str, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64); 8] = [
            ("APM", "苹果主连", 9570.0, 211.0, 2.25, 9500.0, 9589.0, 9427.0, 9359.0, 209_300.0, 19_902_000_000.0, 152_718.0),
            ("AP601", "苹果601", 9570.0, 211.0, 2.25, 9500.0, 9589.0, 9427.0, 9359.0, 209_300.0, 19_902_000_000.0, 152_718.0),
            ("APS", "苹果次主连", 9495.0, 185.0, 1.99, 9445.0, 9594.0, 9395.0, 9310.0, 51_800.0, 4_905_000_000.0, 68_961.0),
            ("AP605", "苹果605", 9495.0, 185.0, 1.99, 9445.0, 9594.0, 9395.0, 9310.0, 51_800.0, 4_905_000_000.0, 68_961.0),
            ("AP604", "苹果604", 9446.0, 177.0, 1.91, 9400.0, 9529.0, 9368.0, 9269.0, 164.0, 15_488_200.0, 755.0),
            ("AP603", "苹果603", 9400.0, 174.0, 1.89, 9352.0, 9471.0, 9300.0, 9226.0, 370.0, 34_698_600.0, 1083.0),
            ("AP512", "苹果512", 9485.0, 138.0, 1.48, 9402.0, 9539.0, 9356.0, 9347.0, 169.0, 15_938_400.0, 377.0),
            ("AP610", "苹果610", 8450.0, 45.0, 0.54, 8430.0, 8493.0, 8375.0, 8405.0, 414.0, 34_871_200.0, 1175.0),
        ];

        rows.into_iter()
            .map(|(code, name, close, change, pct, open, high, low, settle, volume, turnover, oi)| {
                Quote::new(code, open, high, low, close, volume, now)
                    .with_name(name)
                    .with_change(change, pct)
                    .with_prev_settle(settle)
                    .with_turnover(turnover)
                    .with_open_interest(oi)
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataProvider for SampleDataProvider {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, ProviderError> {
        Ok(Self::quotes())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}
