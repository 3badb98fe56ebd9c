use thiserror::Error;

/// Failures fetching a quote snapshot from a market-data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),
}

impl ProviderError {
    /// Whether a retry may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ProviderError::Status(status) => *status >= 500 || *status == 429,
            ProviderError::Payload(_) => false,
        }
    }
}
