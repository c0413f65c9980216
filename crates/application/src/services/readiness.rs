use std::sync::atomic::{AtomicBool, Ordering};

/// Single-writer readiness flag read by every in-flight query.
///
/// Starts `NotReady`. Backend initialization flips it once; shutdown flips
/// it back.
#[derive(Debug, Default)]
pub struct ReadinessGate {
    ready: AtomicBool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Returns `true` only for the call that performed the transition.
    pub fn mark_ready(&self) -> bool {
        self.ready
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn mark_not_ready(&self) -> bool {
        self.ready.swap(false, Ordering::AcqRel)
    }
}
