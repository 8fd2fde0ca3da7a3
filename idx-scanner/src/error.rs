//! Errors that abort a scan

use thiserror::Error;

/// Failures that cross the scanner boundary.
///
/// Per-symbol problems never become a `ScanError`; they are tallied in the
/// scan report instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The symbol listing collaborator failed
    #[error("failed to list symbols: {0:#}")]
    Listing(anyhow::Error),
    /// The symbol listing collaborator returned nothing
    #[error("symbol listing returned no symbols")]
    EmptyUniverse,
    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),
    /// A `ScanContext` drives exactly one scan
    #[error("scan context already used (phase: {0})")]
    ContextReused(crate::scan::ScanPhase),
}
