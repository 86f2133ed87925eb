//! Monotonic id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter issuing ids starting at 1.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issues the next id. Safe to call from any number of threads.
    pub(crate) fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}
