//! Time-ordered numeric series with an explicit undefined marker.

use serde::{Deserialize, Serialize};

/// Ordered sequence of samples, one per time step.
///
/// `None` marks a position with no value: a gap in the input, a window that is
/// not yet full, or a 0/0 condition inside an indicator. It serializes as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Option<f64>>);

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        values.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`, flattening out-of-range and undefined to `None`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Value at the last position, `None` if it is undefined.
    pub fn latest(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }

    /// Value one step before the last position.
    pub fn previous(&self) -> Option<f64> {
        match self.0.len() {
            0 | 1 => None,
            n => self.get(n - 2),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    /// Element-wise combination; undefined on either side gives undefined.
    pub fn zip_with<F>(&self, other: &Series, f: F) -> Series
    where
        F: Fn(f64, f64) -> f64,
    {
        self.iter()
            .zip(other.iter())
            .map(|pair| match pair {
                (Some(a), Some(b)) => Some(f(a, b)),
                _ => None,
            })
            .collect()
    }

    /// Applies `f` to every defined position.
    pub fn map_defined<F>(&self, f: F) -> Series
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|v| v.map(&f)).collect()
    }

    pub fn into_inner(self) -> Vec<Option<f64>> {
        self.0
    }
}

impl FromIterator<Option<f64>> for Series {
    /// Non-finite values are stored as undefined.
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect(),
        )
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        values.iter().copied().map(Some).collect()
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::new(values)
    }
}
