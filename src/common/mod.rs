//! Numeric building blocks shared by the indicators.

pub mod math;

pub use math::{ewm, rolling_max, rolling_mean, rolling_min, rolling_stddev, Smoothing};
