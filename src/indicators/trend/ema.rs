//! EMA (Exponential Moving Average) indicator

use crate::common::math::{self, Smoothing};
use crate::indicators::error::Result;
use crate::indicators::validation::{require_len, require_period};
use crate::models::series::Series;

/// EMA with α = 2 / (period + 1), seeded with the first close.
pub fn calculate_ema(close: &Series, period: usize) -> Result<Series> {
    require_period(period)?;
    require_len(close, 1)?;
    math::ewm(close, Smoothing::Span(period))
}

/// EMA with the default period (12)
pub fn calculate_ema_default(close: &Series) -> Result<Series> {
    calculate_ema(close, 12)
}
