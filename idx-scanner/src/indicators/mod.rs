//! Technical indicators module
//!
//! Moving averages and MACD over daily closes. All functions are pure and
//! return index-aligned series so callers can pair values with candle dates.

pub mod ema;
pub mod macd;
pub mod sma;

pub use ema::*;
pub use macd::*;
pub use sma::*;
