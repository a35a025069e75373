use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Ceiling on the number of operation attempts made by one solve call.
///
/// Counters are atomic so the parallel search can share a single budget
/// between branches; the sequential search uses it through `&self` as well.
#[derive(Debug)]
pub struct CallBudget {
    max_calls: u64,
    consumed: AtomicU64,
    cancelled: AtomicBool,
}

impl CallBudget {
    pub fn new(max_calls: u64) -> Self {
        Self {
            max_calls,
            consumed: AtomicU64::new(0),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Consume one attempt. Returns `false` once the ceiling is reached or the
    /// budget has been cancelled; the counter never goes past the ceiling.
    pub fn try_consume(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return false;
        }
        self.consumed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |used| {
                (used < self.max_calls).then_some(used + 1)
            })
            .is_ok()
    }

    /// Deny all further attempts without marking the budget as exhausted.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn consumed(&self) -> u64 {
        self.consumed.load(Ordering::Relaxed)
    }

    pub fn max_calls(&self) -> u64 {
        self.max_calls
    }

    pub fn is_exhausted(&self) -> bool {
        self.consumed() >= self.max_calls
    }
}
