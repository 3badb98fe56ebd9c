//! Collaborators that supply quote snapshots to the engine.

pub mod eastmoney;
pub mod error;
pub mod market_data;
pub mod sample;

pub use eastmoney::EastmoneyProvider;
pub use error::ProviderError;
pub use market_data::MarketDataProvider;
pub use sample::SampleDataProvider;
