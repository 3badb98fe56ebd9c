//! Argument checks shared by the indicator functions.

use crate::indicators::error::{IndicatorError, Result};
use crate::models::series::Series;

/// Rejects a zero period; every window needs at least one sample.
pub fn require_period(period: usize) -> Result<()> {
    require_period_at_least(period, 1)
}

/// Rejects `period < min`, reporting `min` as the requirement.
pub fn require_period_at_least(period: usize, min: usize) -> Result<()> {
    if period < min {
        return Err(IndicatorError::insufficient(min, period));
    }
    Ok(())
}

pub fn require_len(series: &Series, required: usize) -> Result<()> {
    let required = required.max(1);
    if series.len() < required {
        return Err(IndicatorError::insufficient(required, series.len()));
    }
    Ok(())
}

/// Fails with a schema error naming `field` when `other` is not index-aligned
/// with `reference`.
pub fn require_aligned(reference: &Series, other: &Series, field: &str) -> Result<()> {
    if reference.len() != other.len() {
        return Err(IndicatorError::schema(field));
    }
    Ok(())
}
