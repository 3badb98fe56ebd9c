//! Core application primitives (HTTP surface)

pub mod http;

pub use http::*;
