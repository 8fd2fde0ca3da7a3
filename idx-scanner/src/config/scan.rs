//! Scan orchestration configuration

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch scan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Symbols evaluated concurrently per batch
    pub batch_size: usize,
    /// Pause between batches, in milliseconds
    pub batch_delay_ms: u64,
    /// History window hint passed to the data source (sessions)
    pub history_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: 20,
            batch_delay_ms: 500,
            history_window: 25,
        }
    }
}

impl ScanConfig {
    /// Pause between batches
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    /// Reject configurations the orchestrator cannot run
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.batch_size == 0 {
            return Err(ScanError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.history_window == 0 {
            return Err(ScanError::InvalidConfig(
                "history_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
