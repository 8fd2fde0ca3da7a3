//! Moving-average crossovers

use crate::data::Candle;
use crate::indicators::{latest_sma, sma};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a fast/slow moving-average cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossKind {
    /// Fast average crosses above the slow one
    Golden,
    /// Fast average crosses below the slow one
    Dead,
}

/// A cross found somewhere in a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossEvent {
    pub date: NaiveDate,
    /// Close on the crossing session
    pub price: f64,
    pub kind: CrossKind,
}

/// Which side of the slow average the fast one ends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendPhase {
    Bullish,
    Bearish,
}

/// Cross between the last two candles, if any.
///
/// Needs `max(fast, slow) + 1` candles.
pub fn detect_ma_cross(candles: &[Candle], fast: usize, slow: usize) -> Option<CrossKind> {
    if candles.len() < 2 {
        return None;
    }
    let prev = &candles[..candles.len() - 1];

    let fast_now = latest_sma(candles, fast)?;
    let slow_now = latest_sma(candles, slow)?;
    let fast_prev = latest_sma(prev, fast)?;
    let slow_prev = latest_sma(prev, slow)?;

    if fast_prev <= slow_prev && fast_now > slow_now {
        Some(CrossKind::Golden)
    } else if fast_prev >= slow_prev && fast_now < slow_now {
        Some(CrossKind::Dead)
    } else {
        None
    }
}

/// SMA(5) crosses above SMA(20) on the last candle
pub fn detect_golden_cross(candles: &[Candle]) -> bool {
    detect_ma_cross(candles, 5, 20) == Some(CrossKind::Golden)
}

/// SMA(5) crosses below SMA(20) on the last candle
pub fn detect_dead_cross(candles: &[Candle]) -> bool {
    detect_ma_cross(candles, 5, 20) == Some(CrossKind::Dead)
}

/// Every strict sign change of `sma(fast) - sma(slow)` across the series
pub fn find_crosses(candles: &[Candle], fast: usize, slow: usize) -> Vec<CrossEvent> {
    let fast_ma = sma(candles, fast);
    let slow_ma = sma(candles, slow);

    let spread: Vec<Option<f64>> = fast_ma
        .iter()
        .zip(slow_ma.iter())
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();

    let mut events = Vec::new();
    for i in 1..candles.len() {
        let (Some(prev), Some(curr)) = (spread[i - 1], spread[i]) else {
            continue;
        };
        let kind = if prev < 0.0 && curr > 0.0 {
            CrossKind::Golden
        } else if prev > 0.0 && curr < 0.0 {
            CrossKind::Dead
        } else {
            continue;
        };
        events.push(CrossEvent {
            date: candles[i].date,
            price: candles[i].close,
            kind,
        });
    }
    events
}

/// Bullish when the fast average ends above the slow one
pub fn trend_phase(candles: &[Candle], fast: usize, slow: usize) -> Option<TrendPhase> {
    let fast_now = latest_sma(candles, fast)?;
    let slow_now = latest_sma(candles, slow)?;
    Some(if fast_now > slow_now {
        TrendPhase::Bullish
    } else {
        TrendPhase::Bearish
    })
}
