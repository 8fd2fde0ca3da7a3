//! Monotonic integer progress

/// Tracks processed symbols and decides when a new percentage is worth emitting.
///
/// Percentages are floored and clamped to 100; only values strictly above the
/// last emitted one are returned, so a sink never sees a repeat or a regression.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: usize,
    processed: usize,
    last_emitted: u8,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            last_emitted: 0,
        }
    }

    /// Record `count` more processed symbols; returns the percentage to emit, if any
    pub fn advance(&mut self, count: usize) -> Option<u8> {
        self.processed = (self.processed + count).min(self.total);
        let percent = self.percent();
        if percent > self.last_emitted {
            self.last_emitted = percent;
            Some(percent)
        } else {
            None
        }
    }

    /// Current floored percentage
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.processed * 100 / self.total).min(100)) as u8
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
