//! Per-symbol evaluation

use crate::data::{validate_series, Candle};
use crate::indicators::latest_sma;
use crate::patterns::{average_volume, breakout_signal, resistance_level, reversal_signal};
use crate::strategy::{MatchDetails, ScanMatch, ScanRule};
use tracing::debug;

/// Run `rule` against one symbol's history.
///
/// Returns `None` for non-matching, too-short, or malformed series. Never panics
/// on data shape.
pub fn evaluate(symbol: &str, candles: &[Candle], rule: &ScanRule) -> Option<ScanMatch> {
    if candles.len() < rule.min_history() {
        debug!(
            "{}: {} candles, {} needed",
            symbol,
            candles.len(),
            rule.min_history()
        );
        return None;
    }
    if let Err(e) = validate_series(candles) {
        debug!("{}: rejecting history: {}", symbol, e);
        return None;
    }

    let details = match rule {
        ScanRule::Breakout(config) => {
            if !breakout_signal(candles, config) {
                return None;
            }
            MatchDetails::Breakout {
                resistance: resistance_level(candles, config.lookback)?,
                average_volume: average_volume(candles)?,
                moving_average: latest_sma(candles, config.ma_period)?,
            }
        }
        ScanRule::Reversal(config) => {
            if !reversal_signal(candles, config) {
                return None;
            }
            MatchDetails::Reversal {
                fast_ma: latest_sma(candles, config.fast_period)?,
                slow_ma: latest_sma(candles, config.slow_period)?,
            }
        }
    };

    let last = candles.last()?;
    Some(ScanMatch {
        symbol: symbol.to_string(),
        date: last.date,
        open: last.open,
        close: last.close,
        volume: last.volume,
        details,
    })
}
