use serde::{Deserialize, Serialize};

use crate::models::series::Series;

/// MACD line, its signal line, and the histogram between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KdjSeries {
    pub k: Series,
    pub d: Series,
    pub j: Series,
}

/// Result of a single indicator computation.
///
/// Serialized untagged: a plain array for single-line indicators, an object of
/// named arrays for the multi-line ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorOutput {
    Single(Series),
    Macd(MacdSeries),
    Bollinger(BollingerSeries),
    Kdj(KdjSeries),
}

impl IndicatorOutput {
    /// Length of the input the output is aligned to.
    pub fn len(&self) -> usize {
        match self {
            IndicatorOutput::Single(series) => series.len(),
            IndicatorOutput::Macd(macd) => macd.macd.len(),
            IndicatorOutput::Bollinger(bands) => bands.middle.len(),
            IndicatorOutput::Kdj(kdj) => kdj.k.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every indicator of one analysis run, at the configured parameters.
///
/// An indicator whose minimum history was not met is left as `None`.
///
/// The three moving averages mirror the readings behind the trend verdict, so
/// their periods come from the classifier configuration (`short_ma_period`,
/// `long_ma_period`, `reference_ma_period`), not from `IndicatorParams::ma_period`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma5: Option<Series>,
    pub ma10: Option<Series>,
    pub ma20: Option<Series>,
    pub ema: Option<Series>,
    pub rsi: Option<Series>,
    pub macd: Option<MacdSeries>,
    pub bollinger: Option<BollingerSeries>,
    pub kdj: Option<KdjSeries>,
    pub atr: Option<Series>,
    pub obv: Option<Series>,
}
