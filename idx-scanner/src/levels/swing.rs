//! Swing point detection
//!
//! A candle is a swing low when its low is strictly below the lows of the
//! `window` candles on each side; swing highs mirror this on the highs.

use crate::data::Candle;

/// Default half-width of the neighbourhood, in candles
pub const DEFAULT_SWING_WINDOW: usize = 2;

/// Which extreme a swing point marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingKind {
    Low,
    High,
}

/// A local price extreme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingPoint {
    /// Index into the analysed slice
    pub index: usize,
    pub price: f64,
    pub kind: SwingKind,
}

/// Swing lows and highs in detection (ascending index) order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwingPoints {
    pub lows: Vec<SwingPoint>,
    pub highs: Vec<SwingPoint>,
}

/// Find swing points with a symmetric half-window.
///
/// Series shorter than `2 * window + 1` produce no points. A zero window is
/// treated as the default.
pub fn detect_swing_points(candles: &[Candle], window: usize) -> SwingPoints {
    let window = if window == 0 { DEFAULT_SWING_WINDOW } else { window };
    let mut points = SwingPoints::default();

    if candles.len() < 2 * window + 1 {
        return points;
    }

    for i in window..candles.len() - window {
        let low = candles[i].low;
        let high = candles[i].high;

        let is_low = (1..=window).all(|j| low < candles[i - j].low && low < candles[i + j].low);
        let is_high =
            (1..=window).all(|j| high > candles[i - j].high && high > candles[i + j].high);

        if is_low {
            points.lows.push(SwingPoint {
                index: i,
                price: low,
                kind: SwingKind::Low,
            });
        }
        if is_high {
            points.highs.push(SwingPoint {
                index: i,
                price: high,
                kind: SwingKind::High,
            });
        }
    }

    points
}
