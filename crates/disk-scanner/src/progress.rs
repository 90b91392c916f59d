//! Progress side channel.
//!
//! Queries report a total once the count-only walk finishes, then one unit per
//! processed file. Observers never influence results.

use std::sync::atomic::{AtomicU64, Ordering};

pub trait ProgressObserver: Send + Sync {
    /// Expected number of units, from the count-only walk.
    fn set_total(&self, total: u64);

    /// `n` more units are done.
    fn advance(&self, n: u64);

    /// The query finished, successfully or not.
    fn finish(&self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn set_total(&self, _total: u64) {}
    fn advance(&self, _n: u64) {}
}

/// Observer that just records what it was told.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    total: AtomicU64,
    completed: AtomicU64,
    finished: AtomicU64,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// How many times `finish` was called.
    pub fn finish_calls(&self) -> u64 {
        self.finished.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for ProgressCounter {
    fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
    }

    fn advance(&self, n: u64) {
        self.completed.fetch_add(n, Ordering::Relaxed);
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::Relaxed);
    }
}
