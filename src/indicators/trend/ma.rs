//! MA (simple Moving Average) indicator

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{require_len, require_period};
use crate::models::series::Series;

/// Arithmetic mean of the trailing `period` closes.
pub fn calculate_ma(close: &Series, period: usize) -> Result<Series> {
    require_period(period)?;
    require_len(close, period)?;
    math::rolling_mean(close, period)
}

/// MA with the default period (5)
pub fn calculate_ma_default(close: &Series) -> Result<Series> {
    calculate_ma(close, 5)
}
