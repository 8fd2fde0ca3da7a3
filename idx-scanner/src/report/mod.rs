//! Scan results and their presentation

pub mod format;
pub mod present;

pub use format::*;
pub use present::*;

use crate::strategy::{ScanKind, ScanMatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How far a scan got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    /// Every batch was evaluated
    Complete,
    /// A stop was requested between batches
    Partial {
        batches_done: usize,
        batches_total: usize,
    },
}

impl ScanStatus {
    pub fn is_partial(&self) -> bool {
        matches!(self, ScanStatus::Partial { .. })
    }
}

/// Finalised output of one scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub kind: ScanKind,
    /// Conditions the matches satisfied
    pub criteria: Vec<String>,
    /// Matches in universe (discovery) order
    pub matches: Vec<ScanMatch>,
    /// Size of the listed universe
    pub total_symbols: usize,
    /// Symbols whose evaluation ran to completion or failure
    pub total_scanned: usize,
    pub total_matched: usize,
    /// Symbols skipped for missing or short history
    pub no_data: usize,
    /// Symbols whose fetch or evaluation failed
    pub failed: usize,
    /// Latest session date among the matches
    pub as_of: Option<NaiveDate>,
    pub status: ScanStatus,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
