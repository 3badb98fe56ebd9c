//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::validation::{require_len, require_period};
use crate::models::series::Series;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss, both simple means over `period` deltas.
///
/// A window with losses of zero and some gain pins RSI at 100. A window with
/// neither gains nor losses is undefined.
pub fn calculate_rsi(close: &Series, period: usize) -> Result<Series> {
    require_period(period)?;
    let required = period
        .checked_add(1)
        .ok_or(IndicatorError::insufficient(usize::MAX, close.len()))?;
    require_len(close, required)?;

    let deltas: Series = std::iter::once(None)
        .chain(
            close
                .as_slice()
                .windows(2)
                .map(|pair| Some(pair[1]? - pair[0]?)),
        )
        .collect();

    let gain = math::rolling_mean(&deltas.map_defined(|d| d.max(0.0)), period)?;
    let loss = math::rolling_mean(&deltas.map_defined(|d| (-d).max(0.0)), period)?;

    let rsi = gain
        .iter()
        .zip(loss.iter())
        .map(|pair| match pair {
            (Some(g), Some(l)) => rsi_from_averages(g, l),
            _ => None,
        })
        .collect();
    Ok(rsi)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { Some(100.0) } else { None };
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(close: &Series) -> Result<Series> {
    calculate_rsi(close, 14)
}
