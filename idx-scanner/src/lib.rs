//! IDX Scanner: technical pattern scanning for Indonesian equities
//!
//! This crate provides the analysis core of the scanner bot:
//! - [ta-rs](https://github.com/greyblake/ta-rs) backs the exponential moving average
//! - [tokio](https://tokio.rs) drives the batched, concurrent symbol scan
//!
//! # Features
//!
//! - **Data**: daily OHLCV candles and series validation
//! - **Indicators**: SMA, EMA, MACD with date-aligned output
//! - **Levels**: swing points and nearest support/resistance
//! - **Patterns**: resistance break, volume surge, MA position, marubozu, MA crosses
//! - **Strategy**: per-symbol evaluation of a scan rule
//! - **Scan**: batched orchestration with progress, pacing and cancellation
//! - **Report**: ranking, truncation and text rendering of results
//!
//! # Example
//!
//! ```no_run
//! use idx_scanner::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run(symbols: Arc<dyn SymbolSource>, history: Arc<dyn HistorySource>) -> Result<()> {
//! let scanner = BatchScanner::new(symbols, history, ScanConfig::default());
//! let report = scanner.run(&ScanRule::breakout(), &ScanContext::detached()).await?;
//! println!("{}", format_report(&report, ResultLimit::default(), RankBy::Discovery));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod levels;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod strategy;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::error::*;
    pub use crate::indicators::*;
    pub use crate::levels::*;
    pub use crate::patterns::*;
    pub use crate::report::*;
    pub use crate::scan::*;
    pub use crate::strategy::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
