//! Batched, bounded-concurrency scan over a symbol universe
//!
//! The universe is split into fixed-size batches processed strictly in order.
//! Each symbol in a batch runs in its own task; the batch settles when every
//! task has finished, successfully or not. Matches are merged only after the
//! batch settles, in universe order.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::report::{ScanReport, ScanStatus};
use crate::scan::{HistorySource, ProgressTracker, ScanContext, ScanPhase, SymbolSource};
use crate::strategy::{evaluate, ScanMatch, ScanRule};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of evaluating one symbol
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    Matched(ScanMatch),
    /// History was fine but the rule did not fire
    NoSignal,
    /// History was missing or too short
    NoData,
    /// Fetching or evaluating failed
    Failed(String),
}

/// Fetch one symbol's history and evaluate it
pub async fn scan_symbol(
    history: &dyn HistorySource,
    symbol: &str,
    window: usize,
    rule: &ScanRule,
) -> SymbolOutcome {
    let candles = match history.get_history(symbol, window).await {
        Ok(Some(candles)) => candles,
        Ok(None) => return SymbolOutcome::NoData,
        Err(e) => return SymbolOutcome::Failed(format!("{e:#}")),
    };

    if candles.len() < rule.min_history() {
        return SymbolOutcome::NoData;
    }

    match evaluate(symbol, &candles, rule) {
        Some(m) => SymbolOutcome::Matched(m),
        None => SymbolOutcome::NoSignal,
    }
}

/// Drives a scan from symbol listing to a finished report
pub struct BatchScanner {
    symbols: Arc<dyn SymbolSource>,
    history: Arc<dyn HistorySource>,
    config: ScanConfig,
}

#[derive(Default)]
struct Tally {
    matches: Vec<ScanMatch>,
    scanned: usize,
    no_data: usize,
    failed: usize,
}

impl BatchScanner {
    pub fn new(
        symbols: Arc<dyn SymbolSource>,
        history: Arc<dyn HistorySource>,
        config: ScanConfig,
    ) -> Self {
        Self {
            symbols,
            history,
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run one scan.
    ///
    /// Fails only when the configuration is invalid or the universe cannot be
    /// listed. Per-symbol failures are logged and counted.
    pub async fn run(&self, rule: &ScanRule, ctx: &ScanContext) -> Result<ScanReport, ScanError> {
        self.config.validate()?;
        if ctx.phase() != ScanPhase::Idle {
            return Err(ScanError::ContextReused(ctx.phase()));
        }

        ctx.set_phase(ScanPhase::Listing);
        let universe = match self.symbols.list_symbols().await {
            Ok(symbols) if !symbols.is_empty() => symbols,
            Ok(_) => {
                ctx.set_phase(ScanPhase::Failed);
                return Err(ScanError::EmptyUniverse);
            }
            Err(e) => {
                ctx.set_phase(ScanPhase::Failed);
                return Err(ScanError::Listing(e));
            }
        };

        info!(
            "Found {} symbols, starting {} scan",
            universe.len(),
            rule.kind()
        );
        ctx.set_phase(ScanPhase::Scanning);

        let batches: Vec<&[String]> = universe.chunks(self.config.batch_size).collect();
        let batches_total = batches.len();
        let mut tracker = ProgressTracker::new(universe.len());
        let mut tally = Tally::default();
        let mut status = ScanStatus::Complete;

        for (index, batch) in batches.iter().enumerate() {
            if ctx.stop_requested() {
                info!(
                    "Stop requested, finishing after {} of {} batches",
                    index, batches_total
                );
                status = ScanStatus::Partial {
                    batches_done: index,
                    batches_total,
                };
                break;
            }

            self.run_batch(batch, rule, &mut tally).await;

            if let Some(percent) = tracker.advance(batch.len()) {
                let message = format!(
                    "Scanned {}/{} symbols ({}%)",
                    tracker.processed(),
                    tracker.total(),
                    percent
                );
                if let Err(e) = ctx.progress().report(percent, &message).await {
                    warn!("Failed to report progress: {:#}", e);
                }
            }
            debug!(
                "Batch {}/{} settled, {} matches so far",
                index + 1,
                batches_total,
                tally.matches.len()
            );

            let delay = self.config.batch_delay();
            if index + 1 < batches_total && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        ctx.set_phase(ScanPhase::Finalizing);
        let report = ScanReport {
            kind: rule.kind(),
            criteria: rule.criteria(),
            total_symbols: universe.len(),
            total_scanned: tally.scanned,
            total_matched: tally.matches.len(),
            no_data: tally.no_data,
            failed: tally.failed,
            as_of: tally.matches.iter().map(|m| m.date).max(),
            matches: tally.matches,
            status,
        };
        info!(
            "{} finished: {} matches from {} symbols ({} without data, {} failed)",
            report.kind, report.total_matched, report.total_scanned, report.no_data, report.failed
        );
        ctx.set_phase(ScanPhase::Done);

        Ok(report)
    }

    /// Evaluate every symbol of a batch concurrently and wait for all of them
    async fn run_batch(&self, batch: &[String], rule: &ScanRule, tally: &mut Tally) {
        let handles: Vec<_> = batch
            .iter()
            .map(|symbol| {
                let history = Arc::clone(&self.history);
                let symbol = symbol.clone();
                let rule = rule.clone();
                let window = self.config.history_window;
                tokio::spawn(async move {
                    scan_symbol(history.as_ref(), &symbol, window, &rule).await
                })
            })
            .collect();

        for (symbol, joined) in batch.iter().zip(join_all(handles).await) {
            tally.scanned += 1;
            match joined {
                Ok(SymbolOutcome::Matched(m)) => {
                    debug!("{}: matched", symbol);
                    tally.matches.push(m);
                }
                Ok(SymbolOutcome::NoSignal) => {}
                Ok(SymbolOutcome::NoData) => {
                    debug!("{}: no usable history", symbol);
                    tally.no_data += 1;
                }
                Ok(SymbolOutcome::Failed(e)) => {
                    warn!("Error scanning {}: {}", symbol, e);
                    tally.failed += 1;
                }
                Err(e) => {
                    warn!("Scan task for {} aborted: {}", symbol, e);
                    tally.failed += 1;
                }
            }
        }
    }
}
