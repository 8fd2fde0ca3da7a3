//! Scan match records

use crate::data::change_percent;
use crate::strategy::ScanKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rule-specific values captured when a symbol matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatchDetails {
    Breakout {
        /// Prior high that was broken
        resistance: f64,
        /// Baseline volume the session was compared with
        average_volume: f64,
        /// Moving average the close sits above
        moving_average: f64,
    },
    Reversal {
        fast_ma: f64,
        slow_ma: f64,
    },
}

impl MatchDetails {
    pub fn kind(&self) -> ScanKind {
        match self {
            MatchDetails::Breakout { .. } => ScanKind::Breakout,
            MatchDetails::Reversal { .. } => ScanKind::Reversal,
        }
    }
}

/// A symbol that satisfied every condition of a scan rule on its last session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMatch {
    pub symbol: String,
    /// Date of the matching session
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub volume: u64,
    pub details: MatchDetails,
}

impl ScanMatch {
    /// Session change from open to close, in percent
    pub fn change_percent(&self) -> Option<f64> {
        change_percent(self.open, self.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Candle;

    #[test]
    fn test_change_percent_matches_the_session_candle() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 7).unwrap();
        let candle = Candle::new(date, 250.0, 280.0, 248.0, 275.0, 9_000);
        let hit = ScanMatch {
            symbol: "GOTO.JK".to_string(),
            date,
            open: candle.open,
            close: candle.close,
            volume: candle.volume,
            details: MatchDetails::Reversal {
                fast_ma: 260.0,
                slow_ma: 255.0,
            },
        };
        assert_eq!(hit.change_percent(), candle.change_percent());
        assert_eq!(hit.change_percent(), Some(10.0));

        let flat_open = ScanMatch { open: 0.0, ..hit };
        assert_eq!(flat_open.change_percent(), None);
    }
}
