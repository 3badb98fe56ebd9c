use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One instrument's price snapshot at a single time step.
///
/// `high >= max(open, close, low)` and `low <= min(open, close, high)` are
/// expected but not enforced; indicators only ever derive numbers from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub open_interest: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prev_settle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub turnover: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            open,
            high,
            low,
            close,
            volume,
            open_interest: 0.0,
            change: None,
            change_pct: None,
            prev_settle: None,
            turnover: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_open_interest(mut self, open_interest: f64) -> Self {
        self.open_interest = open_interest;
        self
    }

    pub fn with_change(mut self, change: f64, change_pct: f64) -> Self {
        self.change = Some(change);
        self.change_pct = Some(change_pct);
        self
    }

    pub fn with_prev_settle(mut self, prev_settle: f64) -> Self {
        self.prev_settle = Some(prev_settle);
        self
    }

    pub fn with_turnover(mut self, turnover: f64) -> Self {
        self.turnover = Some(turnover);
        self
    }
}
