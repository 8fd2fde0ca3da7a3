//! Support and resistance levels derived from swing points

use crate::data::Candle;
use crate::levels::swing::{detect_swing_points, DEFAULT_SWING_WINDOW};

/// Default number of trailing candles examined
pub const DEFAULT_LOOKBACK: usize = 60;
/// Default number of levels on each side
pub const DEFAULT_LEVELS: usize = 5;

/// Nearest-first support and resistance levels.
///
/// Both vectors always hold exactly the requested number of entries; missing
/// levels are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportResistance {
    /// Close of the last candle in the examined window
    pub current_close: Option<f64>,
    /// Strictly descending, all below `current_close`
    pub supports: Vec<Option<f64>>,
    /// Strictly ascending, all above `current_close`
    pub resistances: Vec<Option<f64>>,
}

impl SupportResistance {
    fn empty(levels: usize) -> Self {
        Self {
            current_close: None,
            supports: vec![None; levels],
            resistances: vec![None; levels],
        }
    }

    pub fn nearest_support(&self) -> Option<f64> {
        self.supports.first().copied().flatten()
    }

    pub fn nearest_resistance(&self) -> Option<f64> {
        self.resistances.first().copied().flatten()
    }

    /// Supports that were actually found
    pub fn valid_supports(&self) -> Vec<f64> {
        self.supports.iter().flatten().copied().collect()
    }

    /// Resistances that were actually found
    pub fn valid_resistances(&self) -> Vec<f64> {
        self.resistances.iter().flatten().copied().collect()
    }
}

/// Derive up to `levels` supports and resistances from the last `lookback` candles.
///
/// A zero `lookback` uses the whole series. An empty input returns all-`None` levels.
pub fn calculate_support_resistance(
    candles: &[Candle],
    lookback: usize,
    levels: usize,
) -> SupportResistance {
    let Some(last) = candles.last() else {
        return SupportResistance::empty(levels);
    };

    let take = if lookback == 0 {
        candles.len()
    } else {
        lookback.min(candles.len())
    };
    let recent = &candles[candles.len() - take..];
    let current = last.close;

    let swings = detect_swing_points(recent, DEFAULT_SWING_WINDOW);

    let mut supports: Vec<f64> = swings
        .lows
        .iter()
        .map(|p| p.price)
        .filter(|&p| p < current)
        .collect();
    supports.sort_by(|a, b| b.total_cmp(a));
    supports.dedup();

    let mut resistances: Vec<f64> = swings
        .highs
        .iter()
        .map(|p| p.price)
        .filter(|&p| p > current)
        .collect();
    resistances.sort_by(|a, b| a.total_cmp(b));
    resistances.dedup();

    SupportResistance {
        current_close: Some(current),
        supports: pad(supports, levels),
        resistances: pad(resistances, levels),
    }
}

fn pad(prices: Vec<f64>, levels: usize) -> Vec<Option<f64>> {
    let mut out: Vec<Option<f64>> = prices.into_iter().take(levels).map(Some).collect();
    out.resize(levels, None);
    out
}
