//! Main analysis engine: every indicator plus the trend verdict in one pass.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::{ClassifierConfig, Config, IndicatorParams};
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::momentum::{calculate_kdj, calculate_macd, calculate_rsi};
use crate::indicators::parser::{PriceField, PriceSource};
use crate::indicators::registry::{IndicatorKind, IndicatorRegistry};
use crate::indicators::trend::{calculate_ema, calculate_ma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::indicators::volume::calculate_obv;
use crate::models::indicators::{IndicatorOutput, IndicatorSet};
use crate::models::signal::{AnalysisReport, TrendVerdict};
use crate::signals::classifier::TrendClassifier;

/// History length below which the verdict is mostly neutral.
pub const MIN_SAMPLES: usize = 20;

pub struct SignalEngine {
    registry: IndicatorRegistry,
    classifier: TrendClassifier,
}

impl SignalEngine {
    pub fn new(params: IndicatorParams, classifier: ClassifierConfig) -> Self {
        Self {
            registry: IndicatorRegistry::with_params(params),
            classifier: TrendClassifier::new(classifier),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.indicators.clone(), config.classifier.clone())
    }

    pub fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    /// Compute one indicator at the engine's parameters.
    pub fn compute<S>(&self, kind: IndicatorKind, source: &S) -> Result<IndicatorOutput>
    where
        S: PriceSource + ?Sized,
    {
        self.registry.compute(kind, source)
    }

    /// Trend verdict over the source's close column.
    pub fn classify<S>(&self, source: &S) -> Result<TrendVerdict>
    where
        S: PriceSource + ?Sized,
    {
        let close = source.column(PriceField::Close)?;
        Ok(self.classifier.classify(&close))
    }

    /// Every indicator and the verdict for one instrument's history.
    ///
    /// Indicators lacking history are left out of the set; schema errors
    /// fail the whole analysis.
    pub fn analyze<S>(&self, symbol: &str, source: &S) -> Result<AnalysisReport>
    where
        S: PriceSource + ?Sized,
    {
        let close = source.column(PriceField::Close)?;
        let high = source.column(PriceField::High)?;
        let low = source.column(PriceField::Low)?;
        let volume = source.column(PriceField::Volume)?;

        if close.len() < MIN_SAMPLES {
            debug!(
                symbol,
                samples = close.len(),
                recommended = MIN_SAMPLES,
                "short history, verdict will lean neutral"
            );
        }

        let p = self.registry.params();
        let c = self.classifier.config();
        let indicators = IndicatorSet {
            ma5: optional(calculate_ma(&close, c.short_ma_period))?,
            ma10: optional(calculate_ma(&close, c.long_ma_period))?,
            ma20: optional(calculate_ma(&close, c.reference_ma_period))?,
            ema: optional(calculate_ema(&close, p.ema_period))?,
            rsi: optional(calculate_rsi(&close, p.rsi_period))?,
            macd: optional(calculate_macd(&close, p.macd_fast, p.macd_slow, p.macd_signal))?,
            bollinger: optional(calculate_bollinger_bands(
                &close,
                p.bollinger_period,
                p.bollinger_std_dev,
            ))?,
            kdj: optional(calculate_kdj(
                &high,
                &low,
                &close,
                p.kdj_period,
                p.kdj_k_period,
                p.kdj_d_period,
            ))?,
            atr: optional(calculate_atr(&high, &low, &close, p.atr_period))?,
            obv: optional(calculate_obv(&close, &volume))?,
        };

        let verdict = self.classifier.classify(&close);
        info!(
            symbol,
            samples = close.len(),
            trend = ?verdict.overall_trend,
            "analysis complete"
        );

        Ok(AnalysisReport {
            symbol: symbol.to_string(),
            samples: close.len(),
            indicators,
            verdict,
            generated_at: Utc::now(),
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(IndicatorParams::default(), ClassifierConfig::default())
    }
}

/// Insufficient history becomes an absent indicator; anything else propagates.
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(IndicatorError::InsufficientData { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
