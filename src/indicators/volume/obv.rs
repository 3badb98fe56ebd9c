//! OBV (On-Balance Volume) indicator

use crate::indicators::error::Result;
use crate::indicators::validation::{require_aligned, require_len};
use crate::models::series::Series;

/// Calculate OBV
///
/// OBV[0] = volume[0]; each later step adds the bar's volume on an up close,
/// subtracts it on a down close, and holds on an unchanged close.
///
/// A step that cannot be evaluated (missing close on either side, or missing
/// volume) is undefined and leaves the running total untouched.
pub fn calculate_obv(close: &Series, volume: &Series) -> Result<Series> {
    require_aligned(close, volume, "volume")?;
    require_len(close, 1)?;

    let obv = close
        .iter()
        .zip(volume.iter())
        .enumerate()
        .scan(0.0_f64, |total, (i, (c, v))| {
            let value = if i == 0 {
                if let Some(v) = v {
                    *total = v;
                }
                v
            } else {
                match (close.get(i - 1), c, v) {
                    (Some(prev), Some(c), Some(v)) => {
                        if c > prev {
                            *total += v;
                        } else if c < prev {
                            *total -= v;
                        }
                        Some(*total)
                    }
                    _ => None,
                }
            };
            Some(value)
        })
        .collect();
    Ok(obv)
}
