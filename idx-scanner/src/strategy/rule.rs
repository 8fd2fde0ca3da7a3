//! Scan rule selection

use crate::config::{BreakoutConfig, ReversalConfig};
use crate::patterns::VOLUME_BASELINE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which composite signal a scan looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Breakout,
    Reversal,
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanKind::Breakout => write!(f, "Breakout Scanner"),
            ScanKind::Reversal => write!(f, "Marubozu + Golden Cross Scanner"),
        }
    }
}

/// A composite classifier together with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScanRule {
    Breakout(BreakoutConfig),
    Reversal(ReversalConfig),
}

impl ScanRule {
    pub fn breakout() -> Self {
        ScanRule::Breakout(BreakoutConfig::default())
    }

    pub fn reversal() -> Self {
        ScanRule::Reversal(ReversalConfig::default())
    }

    pub fn kind(&self) -> ScanKind {
        match self {
            ScanRule::Breakout(_) => ScanKind::Breakout,
            ScanRule::Reversal(_) => ScanKind::Reversal,
        }
    }

    /// Fewest candles every classifier in the rule can work with
    pub fn min_history(&self) -> usize {
        match self {
            ScanRule::Breakout(c) => (c.lookback + 1).max(VOLUME_BASELINE + 1).max(c.ma_period),
            ScanRule::Reversal(c) => c.fast_period.max(c.slow_period) + 1,
        }
    }

    /// Human readable conditions, one per line
    pub fn criteria(&self) -> Vec<String> {
        match self {
            ScanRule::Breakout(c) => vec![
                format!("Break resistance ({} sessions)", c.lookback),
                format!(
                    "Volume > {}x the {}-session average",
                    c.volume_threshold, VOLUME_BASELINE
                ),
                format!("Close above MA{}", c.ma_period),
            ],
            ScanRule::Reversal(c) => vec![
                "Bullish marubozu on the last candle".to_string(),
                format!(
                    "Golden cross: MA{} crosses above MA{}",
                    c.fast_period, c.slow_period
                ),
            ],
        }
    }
}
