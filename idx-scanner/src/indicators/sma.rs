//! SMA (Simple Moving Average) indicator

use crate::data::Candle;
use ta::indicators::SimpleMovingAverage;
use ta::Next;

/// SMA of closing prices, index-aligned with `candles`.
///
/// Entries before `period - 1` are `None`.
pub fn sma(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    sma_values(&closes, period)
}

/// SMA over an arbitrary value series
pub fn sma_values(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let Ok(mut inner) = SimpleMovingAverage::new(period) else {
        return vec![None; values.len()];
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let average = inner.next(value);
            (i + 1 >= period).then_some(average)
        })
        .collect()
}

/// SMA of the closes ending at the last candle
pub fn latest_sma(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }
    sma(&candles[candles.len() - period..], period)
        .pop()
        .flatten()
}
