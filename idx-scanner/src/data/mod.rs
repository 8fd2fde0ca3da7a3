//! Data management module
//!
//! Daily OHLCV candles as delivered by the history collaborator.

pub mod candle;

pub use candle::*;
