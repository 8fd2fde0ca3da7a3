//! Daily OHLCV candle data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One trading session of OHLCV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Session date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume (shares)
    pub volume: u64,
}

impl Candle {
    /// Create a new candle
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check if candle is bullish
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if candle is bearish
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Get body size (absolute difference between open and close)
    pub fn body_size(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Get upper wick size
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Get lower wick size
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Get total range (high - low)
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Session change from open to close, in percent.
    ///
    /// `None` when the open is not a positive price.
    pub fn change_percent(&self) -> Option<f64> {
        change_percent(self.open, self.close)
    }

    fn has_finite_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p >= 0.0)
    }
}

/// Reasons a candle sequence cannot be analysed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("candle {index} is not after the previous session ({date})")]
    OutOfOrder { index: usize, date: NaiveDate },
    #[error("candle {index} ({date}) has a non-finite or negative price")]
    InvalidPrice { index: usize, date: NaiveDate },
    #[error("candle {index} ({date}) has high below low")]
    InvertedRange { index: usize, date: NaiveDate },
}

/// Check that a series is strictly ascending by date with sane prices.
pub fn validate_series(candles: &[Candle]) -> Result<(), SeriesError> {
    for (index, candle) in candles.iter().enumerate() {
        if !candle.has_finite_prices() {
            return Err(SeriesError::InvalidPrice {
                index,
                date: candle.date,
            });
        }
        if candle.high < candle.low {
            return Err(SeriesError::InvertedRange {
                index,
                date: candle.date,
            });
        }
        if index > 0 && candle.date <= candles[index - 1].date {
            return Err(SeriesError::OutOfOrder {
                index,
                date: candle.date,
            });
        }
    }
    Ok(())
}

/// Percent move from `open` to `close`; `None` unless `open` is positive
pub fn change_percent(open: f64, close: f64) -> Option<f64> {
    if open > 0.0 {
        Some((close - open) / open * 100.0)
    } else {
        None
    }
}

/// Closing prices of a series
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
