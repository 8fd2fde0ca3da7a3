//! EMA (Exponential Moving Average) indicator

use ta::indicators::ExponentialMovingAverage;
use ta::Next;

/// EMA over `values`, defined for every index.
///
/// Seeded with `values[0]`, then `ema[i] = values[i] * k + ema[i-1] * (1 - k)`
/// with `k = 2 / (period + 1)`. A zero period or empty input yields an empty vector.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let Ok(mut inner) = ExponentialMovingAverage::new(period) else {
        return Vec::new();
    };

    values.iter().map(|&value| inner.next(value)).collect()
}
