//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math::{self, Smoothing};
use crate::indicators::error::Result;
use crate::indicators::validation::{require_len, require_period};
use crate::models::indicators::MacdSeries;
use crate::models::series::Series;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    close: &Series,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdSeries> {
    require_period(fast_period)?;
    require_period(slow_period)?;
    require_period(signal_period)?;
    require_len(close, 1)?;

    let fast_ema = math::ewm(close, Smoothing::Span(fast_period))?;
    let slow_ema = math::ewm(close, Smoothing::Span(slow_period))?;

    let macd = fast_ema.zip_with(&slow_ema, |f, s| f - s);
    let signal = math::ewm(&macd, Smoothing::Span(signal_period))?;
    let histogram = macd.zip_with(&signal, |m, s| m - s);

    Ok(MacdSeries {
        macd,
        signal,
        histogram,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(close: &Series) -> Result<MacdSeries> {
    calculate_macd(close, 12, 26, 9)
}
