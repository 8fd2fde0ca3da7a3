//! Per-scan context: progress sink, stop signal and phase reporting
//!
//! Every scan gets its own context, so concurrent scans never share progress state.

use crate::scan::{NoProgress, ProgressSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of a batch scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPhase {
    Idle,
    Listing,
    Scanning,
    Finalizing,
    Done,
    /// Terminal; only reachable from `Listing`
    Failed,
}

impl ScanPhase {
    /// Whether the state machine allows moving to `next`
    pub fn can_transition_to(self, next: ScanPhase) -> bool {
        use ScanPhase::*;
        matches!(
            (self, next),
            (Idle, Listing)
                | (Listing, Scanning)
                | (Listing, Failed)
                | (Scanning, Finalizing)
                | (Finalizing, Done)
        )
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanPhase::Idle => "idle",
            ScanPhase::Listing => "listing",
            ScanPhase::Scanning => "scanning",
            ScanPhase::Finalizing => "finalizing",
            ScanPhase::Done => "done",
            ScanPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Receiving end of a stop request, checked between batches
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

/// Sending end of a stop request
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopSignal {
    pub fn new() -> (StopSignal, StopHandle) {
        let (tx, rx) = watch::channel(false);
        (StopSignal { rx }, StopHandle { tx: Arc::new(tx) })
    }

    /// A signal that is never raised
    pub fn never() -> StopSignal {
        StopSignal::new().0
    }

    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }
}

impl StopHandle {
    /// Ask the scan to finish after the batch in flight
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }
}

/// Everything one scan invocation reports to or listens on
pub struct ScanContext {
    progress: Arc<dyn ProgressSink>,
    stop: StopSignal,
    phase: watch::Sender<ScanPhase>,
}

impl ScanContext {
    pub fn new(progress: Arc<dyn ProgressSink>, stop: StopSignal) -> Self {
        let (phase, _) = watch::channel(ScanPhase::Idle);
        Self {
            progress,
            stop,
            phase,
        }
    }

    /// Context with no progress reporting and no stop signal
    pub fn detached() -> Self {
        Self::new(Arc::new(NoProgress), StopSignal::never())
    }

    /// Observe phase changes of the scan using this context
    pub fn subscribe_phase(&self) -> watch::Receiver<ScanPhase> {
        self.phase.subscribe()
    }

    pub fn phase(&self) -> ScanPhase {
        *self.phase.borrow()
    }

    pub(crate) fn set_phase(&self, next: ScanPhase) {
        let current = self.phase();
        debug_assert!(
            current.can_transition_to(next),
            "invalid scan transition {current} -> {next}"
        );
        tracing::debug!("scan phase {} -> {}", current, next);
        self.phase.send_replace(next);
    }

    pub(crate) fn progress(&self) -> &dyn ProgressSink {
        self.progress.as_ref()
    }

    pub(crate) fn stop_requested(&self) -> bool {
        self.stop.is_stopped()
    }
}
