//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod quote;
pub mod series;
pub mod signal;

pub use indicators::{BollingerSeries, IndicatorOutput, IndicatorSet, KdjSeries, MacdSeries};
pub use quote::Quote;
pub use series::Series;
pub use signal::{AnalysisReport, MacdCross, RsiSignal, TrendDirection, TrendVerdict};
