//! Turns per-bar records into aligned numeric columns.
//!
//! Two record shapes are accepted: typed [`Quote`]s and loosely typed JSON
//! objects as received over the wire. Columns are extracted on demand so that
//! only the fields an indicator actually needs are checked.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::indicators::error::{IndicatorError, Result};
use crate::models::quote::Quote;
use crate::models::series::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
    OpenInterest,
}

impl PriceField {
    /// Record key the field is read from.
    pub fn key(self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Close => "close",
            PriceField::Volume => "volume",
            PriceField::OpenInterest => "open_interest",
        }
    }
}

/// Anything that can hand out a time-ordered column per price field.
pub trait PriceSource {
    fn column(&self, field: PriceField) -> Result<Series>;

    fn sample_count(&self) -> usize;
}

impl PriceSource for [Quote] {
    fn column(&self, field: PriceField) -> Result<Series> {
        let column = self
            .iter()
            .map(|q| {
                Some(match field {
                    PriceField::Open => q.open,
                    PriceField::High => q.high,
                    PriceField::Low => q.low,
                    PriceField::Close => q.close,
                    PriceField::Volume => q.volume,
                    PriceField::OpenInterest => q.open_interest,
                })
            })
            .collect();
        Ok(column)
    }

    fn sample_count(&self) -> usize {
        self.len()
    }
}

impl PriceSource for [Value] {
    /// A JSON `null` is a gap; a missing key or a non-numeric value is a
    /// schema error naming the field. Unknown keys are ignored.
    fn column(&self, field: PriceField) -> Result<Series> {
        let key = field.key();
        let column = self
            .iter()
            .map(|record| parse_numeric(record, key))
            .collect::<Result<Vec<_>>>()?;
        Ok(Series::new(column))
    }

    fn sample_count(&self) -> usize {
        self.len()
    }
}

impl PriceSource for Vec<Quote> {
    fn column(&self, field: PriceField) -> Result<Series> {
        self.as_slice().column(field)
    }

    fn sample_count(&self) -> usize {
        self.len()
    }
}

impl PriceSource for Vec<Value> {
    fn column(&self, field: PriceField) -> Result<Series> {
        self.as_slice().column(field)
    }

    fn sample_count(&self) -> usize {
        self.len()
    }
}

fn parse_numeric(record: &Value, key: &str) -> Result<Option<f64>> {
    let value = record
        .as_object()
        .and_then(|fields| fields.get(key))
        .ok_or_else(|| IndicatorError::schema(key))?;

    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| IndicatorError::schema(key)),
        _ => Err(IndicatorError::schema(key)),
    }
}

/// String identifier of a record set, read from the first record that has
/// one under `symbol`, `code` or `name`.
pub fn record_symbol(records: &[Value]) -> Option<String> {
    records.iter().find_map(|record| {
        ["symbol", "code", "name"]
            .iter()
            .find_map(|key| record.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    })
}
