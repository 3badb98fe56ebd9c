//! Market data provider interface.

use async_trait::async_trait;

use crate::models::quote::Quote;
use crate::services::error::ProviderError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Latest snapshot of every instrument the provider covers.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, ProviderError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}
