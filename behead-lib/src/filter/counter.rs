use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Number of lines processed so far, shared between the filter and the reporter.
///
/// The filter is the only writer. Readers take snapshots and may lag behind,
/// which is fine for throughput reporting.
#[derive(Debug, Clone, Default)]
pub struct LineCounter(Arc<AtomicU64>);

impl LineCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        let _ = self.0.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
