//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{require_len, require_period};
use crate::models::indicators::BollingerSeries;
use crate::models::series::Series;

/// Calculate Bollinger Bands
///
/// Middle Band = MA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
///
/// `std_dev` is not range-checked; a negative multiplier swaps the upper and
/// lower bands.
pub fn calculate_bollinger_bands(
    close: &Series,
    period: usize,
    std_dev: f64,
) -> Result<BollingerSeries> {
    require_period(period)?;
    require_len(close, period)?;

    let middle = math::rolling_mean(close, period)?;
    let band = math::rolling_stddev(close, period)?.map_defined(|sd| std_dev * sd);

    let upper = middle.zip_with(&band, |m, b| m + b);
    let lower = middle.zip_with(&band, |m, b| m - b);

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
    })
}

/// Calculate Bollinger Bands with default parameters (20 MA, 2σ)
pub fn calculate_bollinger_bands_default(close: &Series) -> Result<BollingerSeries> {
    calculate_bollinger_bands(close, 20, 2.0)
}
