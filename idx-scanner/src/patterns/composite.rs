//! Composite signals tested per symbol by the scanner

use crate::config::{BreakoutConfig, ReversalConfig};
use crate::data::Candle;
use crate::patterns::{
    detect_break_resistance, detect_high_volume, detect_ma_cross, detect_marubozu, is_above_ma,
    CrossKind, Marubozu,
};

/// Resistance break, volume surge and close above the moving average, all on the last candle
pub fn breakout_signal(candles: &[Candle], config: &BreakoutConfig) -> bool {
    detect_break_resistance(candles, config.lookback)
        && detect_high_volume(candles, config.volume_threshold)
        && is_above_ma(candles, config.ma_period)
}

/// Bullish marubozu on the last candle that also completes a golden cross
pub fn reversal_signal(candles: &[Candle], config: &ReversalConfig) -> bool {
    let Some(last) = candles.last() else {
        return false;
    };
    detect_marubozu(last, config.body_threshold) == Some(Marubozu::Bullish)
        && detect_ma_cross(candles, config.fast_period, config.slow_period)
            == Some(CrossKind::Golden)
}
