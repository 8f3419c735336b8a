use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean latch serializing animation sessions.
///
/// At most one run may be active; a selection arriving while the latch is
/// held must be rejected by the caller (and surfaced as a notice), never
/// queued. Checked once per fetch-success event, not per tick.
#[derive(Debug, Default)]
pub struct SessionGate {
    active: AtomicBool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to claim the gate.
    ///
    /// Returns `false` if a run is already active.
    pub fn try_start(&self) -> bool {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the gate at the run's terminal transition.
    pub fn finish(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
