//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{require_aligned, require_len, require_period};
use crate::models::series::Series;

/// Calculate ATR (Average True Range)
///
/// True range of the first bar is its high - low; later bars also consider
/// the gap to the previous close. ATR is the simple mean of `period` true
/// ranges.
pub fn calculate_atr(high: &Series, low: &Series, close: &Series, period: usize) -> Result<Series> {
    require_period(period)?;
    require_aligned(close, high, "high")?;
    require_aligned(close, low, "low")?;
    require_len(close, period)?;

    let true_ranges: Series = (0..close.len())
        .map(|i| {
            let prev_close = i.checked_sub(1).and_then(|p| close.get(p));
            Some(math::true_range(high.get(i)?, low.get(i)?, prev_close))
        })
        .collect();

    math::rolling_mean(&true_ranges, period)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(high: &Series, low: &Series, close: &Series) -> Result<Series> {
    calculate_atr(high, low, close, 14)
}
