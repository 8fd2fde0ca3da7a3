//! Collaborator interfaces the scanner drives

use crate::data::Candle;
use anyhow::Result;
use async_trait::async_trait;

/// Supplies the universe of symbols to scan
#[async_trait]
pub trait SymbolSource: Send + Sync {
    /// Full symbol list. An empty list is treated as a failure by the scanner.
    async fn list_symbols(&self) -> Result<Vec<String>>;
}

/// Supplies daily history per symbol
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Ascending daily candles covering at least `window` sessions when available.
    ///
    /// `Ok(None)` means the symbol has no usable history.
    async fn get_history(&self, symbol: &str, window: usize) -> Result<Option<Vec<Candle>>>;
}

/// Receives scan progress. Best effort: errors are logged and ignored.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn report(&self, percent: u8, message: &str) -> Result<()>;
}

/// Progress sink that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

#[async_trait]
impl ProgressSink for NoProgress {
    async fn report(&self, _percent: u8, _message: &str) -> Result<()> {
        Ok(())
    }
}
