//! Environment-driven configuration.
//!
//! Everything is read once at start-up into a [`Config`] that is then passed
//! explicitly to whoever needs it.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::indicators::registry::IndicatorParams;

/// Periods and thresholds used by the trend classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub short_ma_period: usize,
    pub long_ma_period: usize,
    pub reference_ma_period: usize,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            short_ma_period: 5,
            long_ma_period: 10,
            reference_ma_period: 20,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

/// Where and how quote snapshots are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub block: String,
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub fallback_to_sample: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://futsseapi.eastmoney.com".to_string(),
            block: "112".to_string(),
            timeout_secs: 10,
            max_retries: 3,
            fallback_to_sample: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub main_contract: String,
    pub provider: ProviderConfig,
    pub indicators: IndicatorParams,
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: 8080,
            main_contract: "APM".to_string(),
            provider: ProviderConfig::default(),
            indicators: IndicatorParams::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Build from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Self {
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            main_contract: lookup("MAIN_CONTRACT").unwrap_or(defaults.main_contract),
            provider: ProviderConfig {
                base_url: lookup("QUOTES_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.provider.base_url),
                block: lookup("QUOTES_BLOCK").unwrap_or(defaults.provider.block),
                timeout_secs: parse_var(&lookup, "QUOTES_TIMEOUT_SECS")
                    .unwrap_or(defaults.provider.timeout_secs),
                max_retries: parse_var(&lookup, "QUOTES_MAX_RETRIES")
                    .unwrap_or(defaults.provider.max_retries),
                fallback_to_sample: parse_var(&lookup, "QUOTES_FALLBACK_TO_SAMPLE")
                    .unwrap_or(defaults.provider.fallback_to_sample),
            },
            indicators: defaults.indicators,
            classifier: defaults.classifier,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}
