//! Breakout classifiers: resistance break, volume surge, close above MA
//!
//! Each predicate returns `false` on series too short to evaluate.

use crate::data::Candle;
use crate::indicators::latest_sma;

/// Sessions averaged for the volume baseline
pub const VOLUME_BASELINE: usize = 5;

/// Highest high over the `lookback` candles before the last one.
///
/// Needs `lookback + 1` candles.
pub fn resistance_level(candles: &[Candle], lookback: usize) -> Option<f64> {
    if lookback == 0 || candles.len() < lookback + 1 {
        return None;
    }
    let end = candles.len() - 1;
    candles[end - lookback..end]
        .iter()
        .map(|c| c.high)
        .reduce(f64::max)
}

/// True when the last close is above the prior `lookback`-session high
pub fn detect_break_resistance(candles: &[Candle], lookback: usize) -> bool {
    match (resistance_level(candles, lookback), candles.last()) {
        (Some(resistance), Some(today)) => today.close > resistance,
        _ => false,
    }
}

/// Mean volume of the five sessions before the last one
pub fn average_volume(candles: &[Candle]) -> Option<f64> {
    if candles.len() < VOLUME_BASELINE + 1 {
        return None;
    }
    let end = candles.len() - 1;
    let total: f64 = candles[end - VOLUME_BASELINE..end]
        .iter()
        .map(|c| c.volume as f64)
        .sum();
    Some(total / VOLUME_BASELINE as f64)
}

/// True when the last session traded more than `threshold` times the baseline
pub fn detect_high_volume(candles: &[Candle], threshold: f64) -> bool {
    match (average_volume(candles), candles.last()) {
        (Some(avg), Some(today)) => today.volume as f64 > avg * threshold,
        _ => false,
    }
}

/// True when the last close is above the `period` SMA ending at it
pub fn is_above_ma(candles: &[Candle], period: usize) -> bool {
    match (latest_sma(candles, period), candles.last()) {
        (Some(ma), Some(today)) => today.close > ma,
        _ => false,
    }
}

/// [`is_above_ma`] with the 20-session average
pub fn is_above_ma20(candles: &[Candle]) -> bool {
    is_above_ma(candles, 20)
}
