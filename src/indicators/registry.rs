//! Indicator registry and trait system

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::indicators::error::Result;
use crate::indicators::parser::{PriceField, PriceSource};
use crate::indicators::{momentum, trend, volatility, volume};
use crate::models::indicators::IndicatorOutput;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
}

/// Trait for all indicators
pub trait Indicator {
    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory;

    /// Get the name of the indicator
    fn name(&self) -> &'static str;

    /// Price fields the indicator reads
    fn required_fields(&self) -> &'static [PriceField];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Ma,
    Ema,
    Rsi,
    Macd,
    Bollinger,
    Kdj,
    Atr,
    Obv,
}

impl IndicatorKind {
    pub fn all() -> [IndicatorKind; 8] {
        [
            IndicatorKind::Ma,
            IndicatorKind::Ema,
            IndicatorKind::Rsi,
            IndicatorKind::Macd,
            IndicatorKind::Bollinger,
            IndicatorKind::Kdj,
            IndicatorKind::Atr,
            IndicatorKind::Obv,
        ]
    }
}

impl Indicator for IndicatorKind {
    fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Ma | IndicatorKind::Ema => IndicatorCategory::Trend,
            IndicatorKind::Rsi | IndicatorKind::Macd | IndicatorKind::Kdj => {
                IndicatorCategory::Momentum
            }
            IndicatorKind::Bollinger | IndicatorKind::Atr => IndicatorCategory::Volatility,
            IndicatorKind::Obv => IndicatorCategory::Volume,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Ma => "ma",
            IndicatorKind::Ema => "ema",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Macd => "macd",
            IndicatorKind::Bollinger => "bollinger",
            IndicatorKind::Kdj => "kdj",
            IndicatorKind::Atr => "atr",
            IndicatorKind::Obv => "obv",
        }
    }

    fn required_fields(&self) -> &'static [PriceField] {
        match self {
            IndicatorKind::Ma
            | IndicatorKind::Ema
            | IndicatorKind::Rsi
            | IndicatorKind::Macd
            | IndicatorKind::Bollinger => &[PriceField::Close],
            IndicatorKind::Kdj | IndicatorKind::Atr => {
                &[PriceField::High, PriceField::Low, PriceField::Close]
            }
            IndicatorKind::Obv => &[PriceField::Close, PriceField::Volume],
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIndicator(pub String);

impl fmt::Display for UnknownIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown indicator `{}`", self.0)
    }
}

impl std::error::Error for UnknownIndicator {}

impl FromStr for IndicatorKind {
    type Err = UnknownIndicator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        IndicatorKind::all()
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or(UnknownIndicator(s.to_string()))
    }
}

/// Window and smoothing parameters for every indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub ma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub kdj_period: usize,
    pub kdj_k_period: usize,
    pub kdj_d_period: usize,
    pub atr_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_period: 5,
            ema_period: 12,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            kdj_period: 9,
            kdj_k_period: 3,
            kdj_d_period: 3,
            atr_period: 14,
        }
    }
}

/// Indicator registry computing any registered indicator from a price source
pub struct IndicatorRegistry {
    params: IndicatorParams,
}

impl IndicatorRegistry {
    /// Create a new registry with default parameters
    pub fn new() -> Self {
        Self {
            params: IndicatorParams::default(),
        }
    }

    /// Create a new registry with custom parameters
    pub fn with_params(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute `kind` over `source`, pulling only the columns it needs.
    pub fn compute<S>(&self, kind: IndicatorKind, source: &S) -> Result<IndicatorOutput>
    where
        S: PriceSource + ?Sized,
    {
        let p = &self.params;
        let output = match kind {
            IndicatorKind::Ma => {
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Single(trend::calculate_ma(&close, p.ma_period)?)
            }
            IndicatorKind::Ema => {
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Single(trend::calculate_ema(&close, p.ema_period)?)
            }
            IndicatorKind::Rsi => {
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Single(momentum::calculate_rsi(&close, p.rsi_period)?)
            }
            IndicatorKind::Macd => {
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Macd(momentum::calculate_macd(
                    &close,
                    p.macd_fast,
                    p.macd_slow,
                    p.macd_signal,
                )?)
            }
            IndicatorKind::Bollinger => {
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Bollinger(volatility::calculate_bollinger_bands(
                    &close,
                    p.bollinger_period,
                    p.bollinger_std_dev,
                )?)
            }
            IndicatorKind::Kdj => {
                let high = source.column(PriceField::High)?;
                let low = source.column(PriceField::Low)?;
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Kdj(momentum::calculate_kdj(
                    &high,
                    &low,
                    &close,
                    p.kdj_period,
                    p.kdj_k_period,
                    p.kdj_d_period,
                )?)
            }
            IndicatorKind::Atr => {
                let high = source.column(PriceField::High)?;
                let low = source.column(PriceField::Low)?;
                let close = source.column(PriceField::Close)?;
                IndicatorOutput::Single(volatility::calculate_atr(
                    &high,
                    &low,
                    &close,
                    p.atr_period,
                )?)
            }
            IndicatorKind::Obv => {
                let close = source.column(PriceField::Close)?;
                let volumes = source.column(PriceField::Volume)?;
                IndicatorOutput::Single(volume::calculate_obv(&close, &volumes)?)
            }
        };
        Ok(output)
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
