//! Classifier parameters for each scan type

use serde::{Deserialize, Serialize};

/// Breakout scan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutConfig {
    /// Sessions before today whose highs define resistance
    pub lookback: usize,
    /// Volume multiple over the 5-session average
    pub volume_threshold: f64,
    /// Moving average the close must sit above
    pub ma_period: usize,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            lookback: 10,
            volume_threshold: 1.5,
            ma_period: 20,
        }
    }
}

/// Reversal (bullish marubozu + golden cross) scan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalConfig {
    /// Maximum wick/body ratio for a marubozu
    pub body_threshold: f64,
    /// Fast moving average period
    pub fast_period: usize,
    /// Slow moving average period
    pub slow_period: usize,
}

impl Default for ReversalConfig {
    fn default() -> Self {
        Self {
            body_threshold: 0.01,
            fast_period: 5,
            slow_period: 20,
        }
    }
}
