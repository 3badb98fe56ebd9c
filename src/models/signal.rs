use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdCross {
    BullishCross,
    BearishCross,
    Neutral,
}

/// Discrete signals plus the latest readings they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendVerdict {
    pub overall_trend: TrendDirection,
    pub rsi_signal: RsiSignal,
    pub macd_signal: MacdCross,
    pub latest_price: Option<f64>,
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal_line: Option<f64>,
}

impl TrendVerdict {
    /// Verdict with every signal neutral and no readings.
    pub fn neutral() -> Self {
        Self {
            overall_trend: TrendDirection::Neutral,
            rsi_signal: RsiSignal::Neutral,
            macd_signal: MacdCross::Neutral,
            latest_price: None,
            ma5: None,
            ma10: None,
            ma20: None,
            rsi: None,
            macd: None,
            macd_signal_line: None,
        }
    }
}

/// Full output of one engine run over a single instrument's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub samples: usize,
    pub indicators: IndicatorSet,
    pub verdict: TrendVerdict,
    pub generated_at: DateTime<Utc>,
}
