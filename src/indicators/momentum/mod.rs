//! Momentum indicators: RSI, MACD, KDJ

pub mod kdj;
pub mod macd;
pub mod rsi;

pub use kdj::*;
pub use macd::*;
pub use rsi::*;
