//! Windowed statistics every indicator is built from.
//!
//! All functions return a series aligned with their input. A trailing window
//! that is not yet full, or that contains an undefined sample, yields `None`.

use crate::indicators::error::{IndicatorError, Result};
use crate::models::series::Series;

/// Smoothing factor for [`ewm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// α = 2 / (span + 1)
    Span(usize),
    /// α = 1 / (com + 1)
    CenterOfMass(usize),
}

impl Smoothing {
    pub fn alpha(self) -> Result<f64> {
        match self {
            Smoothing::Span(0) | Smoothing::CenterOfMass(0) => {
                Err(IndicatorError::insufficient(1, 0))
            }
            Smoothing::Span(span) => Ok(2.0 / (span as f64 + 1.0)),
            Smoothing::CenterOfMass(com) => Ok(1.0 / (com as f64 + 1.0)),
        }
    }
}

fn check_input(series: &Series, window: usize) -> Result<()> {
    if window == 0 || series.is_empty() {
        return Err(IndicatorError::insufficient(1, 0));
    }
    Ok(())
}

/// Runs `f` over every full, fully defined trailing window.
fn rolling<F>(series: &Series, window: usize, f: F) -> Result<Series>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    check_input(series, window)?;

    let samples = series.as_slice();
    let mut buf = Vec::with_capacity(window.min(samples.len()));
    let out = (0..samples.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            buf.clear();
            for v in &samples[i + 1 - window..=i] {
                buf.push((*v)?);
            }
            f(&buf)
        })
        .collect();
    Ok(out)
}

pub fn rolling_mean(series: &Series, window: usize) -> Result<Series> {
    rolling(series, window, |w| Some(w.iter().sum::<f64>() / w.len() as f64))
}

/// Sample standard deviation (n - 1 denominator) over a trailing window.
///
/// A window of one has no degrees of freedom, so every position is undefined.
pub fn rolling_stddev(series: &Series, window: usize) -> Result<Series> {
    rolling(series, window, |w| {
        let n = w.len();
        if n < 2 {
            return None;
        }
        // Shifted by the first sample so a constant window is exactly zero.
        let origin = w[0];
        let (sum, sum_sq) = w.iter().fold((0.0, 0.0), |(s, sq), x| {
            let d = x - origin;
            (s + d, sq + d * d)
        });
        let variance = (sum_sq - sum * sum / n as f64) / (n - 1) as f64;
        Some(variance.max(0.0).sqrt())
    })
}

pub fn rolling_min(series: &Series, window: usize) -> Result<Series> {
    rolling(series, window, |w| w.iter().copied().reduce(f64::min))
}

pub fn rolling_max(series: &Series, window: usize) -> Result<Series> {
    rolling(series, window, |w| w.iter().copied().reduce(f64::max))
}

/// Exponentially weighted mean without bias adjustment.
///
/// `ewm[0] = x[0]`, `ewm[i] = α·x[i] + (1 − α)·ewm[i − 1]`. Leading undefined
/// samples stay undefined and the recurrence seeds at the first defined one;
/// a later undefined sample repeats the previous smoothed value.
pub fn ewm(series: &Series, smoothing: Smoothing) -> Result<Series> {
    let alpha = smoothing.alpha()?;
    if series.is_empty() {
        return Err(IndicatorError::insufficient(1, 0));
    }

    let mut state: Option<f64> = None;
    let out = series
        .iter()
        .map(|sample| {
            state = match (state, sample) {
                (None, x) => x,
                (Some(prev), Some(x)) => Some(alpha * x + (1.0 - alpha) * prev),
                (Some(prev), None) => Some(prev),
            };
            state
        })
        .collect();
    Ok(out)
}

/// `true_range` of one bar given the previous close, if there is one.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(pc) => range.max((high - pc).abs()).max((low - pc).abs()),
        None => range,
    }
}
