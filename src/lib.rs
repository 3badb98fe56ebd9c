//! Technical-analysis engine for futures quote snapshots.
//!
//! Price columns go through windowed statistics into indicator series
//! (MA, EMA, RSI, MACD, Bollinger, KDJ, ATR, OBV), and a rule-based
//! classifier reduces the latest readings into a trend verdict. Undefined
//! positions are carried as `None` end to end.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
