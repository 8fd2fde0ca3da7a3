//! Single-candle patterns

use crate::data::Candle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum wick-to-body ratio
pub const DEFAULT_BODY_THRESHOLD: f64 = 0.01;

/// Marubozu direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marubozu {
    Bullish,
    Bearish,
}

impl fmt::Display for Marubozu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marubozu::Bullish => write!(f, "bullish"),
            Marubozu::Bearish => write!(f, "bearish"),
        }
    }
}

/// Classify a candle whose wicks are both at most `body_threshold` of its body.
///
/// A candle with no body is never a marubozu.
pub fn detect_marubozu(candle: &Candle, body_threshold: f64) -> Option<Marubozu> {
    let body = candle.body_size();
    if body == 0.0 {
        return None;
    }

    let upper = candle.upper_wick() / body;
    let lower = candle.lower_wick() / body;
    if upper <= body_threshold && lower <= body_threshold {
        Some(if candle.close > candle.open {
            Marubozu::Bullish
        } else {
            Marubozu::Bearish
        })
    } else {
        None
    }
}
