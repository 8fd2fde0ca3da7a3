//! MACD (Moving Average Convergence Divergence) indicator
//!
//! The MACD line covers the whole input. The signal EMA is computed over the
//! line from index `slow - 1`, where the slow EMA has seen a full period.
//! Histogram samples start `signal - 1` records later and pair
//! `line[histogram_offset() + k]` with `signal[k]`.

use crate::data::Candle;
use crate::indicators::ema::ema;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// MACD periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    /// Fast EMA period
    pub fast: usize,
    /// Slow EMA period
    pub slow: usize,
    /// Signal EMA period
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD output series
#[derive(Debug, Clone, PartialEq)]
pub struct Macd {
    params: MacdParams,
    /// `ema(fast) - ema(slow)`, one entry per input candle
    pub line: Vec<f64>,
    /// EMA of `line[slow-1..]`; `signal[k]` is reported with candle `histogram_offset() + k`
    pub signal: Vec<f64>,
    /// `line - signal`; `histogram[k]` belongs to candle `histogram_offset() + k`
    pub histogram: Vec<f64>,
}

/// One fully-populated MACD sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub date: NaiveDate,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl Macd {
    /// Start of the line slice the signal EMA runs over
    pub fn signal_offset(&self) -> usize {
        self.params.slow.saturating_sub(1)
    }

    /// Candle index of `histogram[0]`
    pub fn histogram_offset(&self) -> usize {
        self.signal_offset() + self.params.signal.saturating_sub(1)
    }

    /// Periods used to compute this output
    pub fn params(&self) -> MacdParams {
        self.params
    }

    /// Date-stamped samples over the histogram range.
    ///
    /// `candles` must be the series this MACD was computed from.
    pub fn points(&self, candles: &[Candle]) -> Vec<MacdPoint> {
        let start = self.histogram_offset();
        self.histogram
            .iter()
            .enumerate()
            .filter_map(|(k, &histogram)| {
                let candle = candles.get(start + k)?;
                Some(MacdPoint {
                    date: candle.date,
                    macd: self.line[start + k],
                    signal: self.signal[k],
                    histogram,
                })
            })
            .collect()
    }

    /// Most recent sample, if the series is long enough to have one
    pub fn latest(&self, candles: &[Candle]) -> Option<MacdPoint> {
        self.points(candles).pop()
    }
}

/// Compute MACD over candle closes
pub fn macd(candles: &[Candle], params: MacdParams) -> Macd {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = ema(&closes, params.fast);
    let slow = ema(&closes, params.slow);

    let line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();

    let signal_offset = params.slow.saturating_sub(1);
    let signal = if line.len() > signal_offset {
        ema(&line[signal_offset..], params.signal)
    } else {
        Vec::new()
    };

    let start = signal_offset + params.signal.saturating_sub(1);
    let histogram = if line.len() > start {
        line[start..]
            .iter()
            .zip(signal.iter())
            .map(|(m, s)| m - s)
            .collect()
    } else {
        Vec::new()
    };

    Macd {
        params,
        line,
        signal,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(closes: &[f64]) -> Vec<Candle> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::new(start + chrono::Duration::days(i as i64), c, c, c, c, 100))
            .collect()
    }

    #[test]
    fn test_macd_lengths() {
        let series = candles(&(0..50).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let result = macd(&series, MacdParams::default());
        assert_eq!(result.line.len(), 50);
        assert_eq!(result.signal.len(), 50 - 25);
        assert_eq!(result.histogram.len(), 50 - 25 - 8);
        assert_eq!(result.signal_offset(), 25);
        assert_eq!(result.histogram_offset(), 33);
    }

    #[test]
    fn test_macd_short_input() {
        let series = candles(&[1.0; 20]);
        let result = macd(&series, MacdParams::default());
        assert_eq!(result.line.len(), 20);
        assert!(result.signal.is_empty());
        assert!(result.histogram.is_empty());
        assert!(result.latest(&series).is_none());

        let result = macd(&candles(&[1.0; 30]), MacdParams::default());
        assert_eq!(result.signal.len(), 5);
        assert!(result.histogram.is_empty());
    }

    #[test]
    fn test_macd_points_are_date_aligned() {
        let series = candles(&(0..40).map(|i| 50.0 + (i as f64 * 0.7).sin()).collect::<Vec<_>>());
        let result = macd(&series, MacdParams::default());
        let points = result.points(&series);
        assert_eq!(points.len(), 40 - 33);
        assert_eq!(points[0].date, series[33].date);
        assert_eq!(points.last().unwrap().date, series[39].date);
        for p in &points {
            assert!((p.histogram - (p.macd - p.signal)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_histogram_pairs_line_tail_with_signal_head() {
        let series = candles(
            &(0..60)
                .map(|i| 100.0 + (i as f64 * 0.3).cos() * 5.0)
                .collect::<Vec<_>>(),
        );
        let result = macd(&series, MacdParams::default());
        for (k, h) in result.histogram.iter().enumerate() {
            assert_eq!(*h, result.line[33 + k] - result.signal[k], "sample {k}");
        }

        let first = result.points(&series)[0];
        assert_eq!(first.date, series[33].date);
        assert_eq!(first.signal, result.signal[0]);
        assert_eq!(first.macd, result.line[33]);
    }
}
