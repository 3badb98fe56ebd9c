//! KDJ (stochastic oscillator with J line) indicator

use crate::common::math::{self, Smoothing};
use crate::indicators::error::Result;
use crate::indicators::validation::{
    require_aligned, require_len, require_period, require_period_at_least,
};
use crate::models::indicators::KdjSeries;
use crate::models::series::Series;

/// Calculate KDJ indicator
///
/// RSV = 100 * (close - lowest low) / (highest high - lowest low) over `period`
/// K = EWM(RSV, com = k_period - 1)
/// D = EWM(K, com = d_period - 1)
/// J = 3K - 2D
///
/// RSV is undefined when the window's high and low coincide. `k_period` and
/// `d_period` must be at least 2 so that each smoothing has a positive
/// center of mass.
pub fn calculate_kdj(
    high: &Series,
    low: &Series,
    close: &Series,
    period: usize,
    k_period: usize,
    d_period: usize,
) -> Result<KdjSeries> {
    require_period(period)?;
    require_period_at_least(k_period, 2)?;
    require_period_at_least(d_period, 2)?;
    require_aligned(close, high, "high")?;
    require_aligned(close, low, "low")?;
    require_len(close, period)?;

    let lowest_low = math::rolling_min(low, period)?;
    let highest_high = math::rolling_max(high, period)?;

    let rsv: Series = close
        .iter()
        .zip(lowest_low.iter().zip(highest_high.iter()))
        .map(|sample| match sample {
            (Some(c), (Some(lo), Some(hi))) if hi - lo != 0.0 => {
                Some(100.0 * (c - lo) / (hi - lo))
            }
            _ => None,
        })
        .collect();

    let k = math::ewm(&rsv, Smoothing::CenterOfMass(k_period - 1))?;
    let d = math::ewm(&k, Smoothing::CenterOfMass(d_period - 1))?;
    let j = k.zip_with(&d, |k, d| 3.0 * k - 2.0 * d);

    Ok(KdjSeries { k, d, j })
}

/// Calculate KDJ with default periods (9, 3, 3)
pub fn calculate_kdj_default(high: &Series, low: &Series, close: &Series) -> Result<KdjSeries> {
    calculate_kdj(high, low, close, 9, 3, 3)
}
