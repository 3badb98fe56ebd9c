//! Rule-based trend classification over a close-price series.

use tracing::debug;

use crate::config::ClassifierConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ma;
use crate::models::indicators::MacdSeries;
use crate::models::series::Series;
use crate::models::signal::{MacdCross, RsiSignal, TrendDirection, TrendVerdict};

pub struct TrendClassifier {
    config: ClassifierConfig,
}

impl TrendClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Derive a verdict from the latest readings of MA, RSI and MACD.
    ///
    /// Short histories degrade to neutral signals: an indicator that cannot be
    /// computed yet is read as undefined.
    pub fn classify(&self, close: &Series) -> TrendVerdict {
        let cfg = &self.config;
        let ma_short = calculate_ma(close, cfg.short_ma_period).ok();
        let ma_long = calculate_ma(close, cfg.long_ma_period).ok();
        let ma_reference = calculate_ma(close, cfg.reference_ma_period).ok();
        let rsi = calculate_rsi(close, cfg.rsi_period).ok();
        let macd = calculate_macd(close, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal).ok();

        let latest = |series: &Option<Series>| series.as_ref().and_then(Series::latest);

        let latest_price = close.latest();
        let ma5 = latest(&ma_short);
        let ma10 = latest(&ma_long);
        let rsi_value = latest(&rsi);

        let verdict = TrendVerdict {
            overall_trend: self.analyze_trend(latest_price, ma5, ma10),
            rsi_signal: self.analyze_rsi(rsi_value),
            macd_signal: self.analyze_macd(macd.as_ref()),
            latest_price,
            ma5,
            ma10,
            ma20: latest(&ma_reference),
            rsi: rsi_value,
            macd: macd.as_ref().and_then(|m| m.macd.latest()),
            macd_signal_line: macd.as_ref().and_then(|m| m.signal.latest()),
        };

        debug!(
            samples = close.len(),
            trend = ?verdict.overall_trend,
            rsi_signal = ?verdict.rsi_signal,
            macd_signal = ?verdict.macd_signal,
            "classified close series"
        );
        verdict
    }

    fn analyze_trend(
        &self,
        price: Option<f64>,
        ma_short: Option<f64>,
        ma_long: Option<f64>,
    ) -> TrendDirection {
        match (price, ma_short, ma_long) {
            (Some(price), Some(short), Some(long)) if short > long && price > short => {
                TrendDirection::Bullish
            }
            (Some(price), Some(short), Some(long)) if short < long && price < short => {
                TrendDirection::Bearish
            }
            _ => TrendDirection::Neutral,
        }
    }

    fn analyze_rsi(&self, rsi: Option<f64>) -> RsiSignal {
        match rsi {
            Some(value) if value > self.config.rsi_overbought => RsiSignal::Overbought,
            Some(value) if value < self.config.rsi_oversold => RsiSignal::Oversold,
            _ => RsiSignal::Neutral,
        }
    }

    /// Crossover between the last two steps of MACD against its signal line.
    fn analyze_macd(&self, macd: Option<&MacdSeries>) -> MacdCross {
        let Some(macd) = macd else {
            return MacdCross::Neutral;
        };
        let readings = (
            macd.macd.previous(),
            macd.signal.previous(),
            macd.macd.latest(),
            macd.signal.latest(),
        );
        match readings {
            (Some(prev_macd), Some(prev_signal), Some(macd), Some(signal)) => {
                if prev_macd <= prev_signal && macd > signal {
                    MacdCross::BullishCross
                } else if prev_macd >= prev_signal && macd < signal {
                    MacdCross::BearishCross
                } else {
                    MacdCross::Neutral
                }
            }
            _ => MacdCross::Neutral,
        }
    }
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
