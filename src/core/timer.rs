use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Single-slot deadline timer driven by an external clock.
///
/// At most one deadline is pending. Scheduling again replaces the pending
/// deadline, so the timer doubles as a debounce primitive. `poll` fires at most
/// once per scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeadlineTimer {
    deadline_ms: Option<f64>,
}

impl DeadlineTimer {
    #[must_use]
    pub const fn idle() -> Self {
        Self { deadline_ms: None }
    }

    /// Arms the timer `delay_ms` after `now_ms` and returns the new deadline.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) -> DeckResult<f64> {
        if !now_ms.is_finite() {
            return Err(DeckError::InvalidData(
                "timer reference time must be finite".to_owned(),
            ));
        }
        if !delay_ms.is_finite() || delay_ms < 0.0 {
            return Err(DeckError::InvalidData(
                "timer delay must be finite and >= 0".to_owned(),
            ));
        }
        let deadline = now_ms + delay_ms;
        self.deadline_ms = Some(deadline);
        Ok(deadline)
    }

    /// Drops the pending deadline. Returns `true` when one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.deadline_ms.is_some()
    }

    #[must_use]
    pub fn deadline(self) -> Option<f64> {
        self.deadline_ms
    }

    /// Fires when `now_ms` reached the pending deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Host-side slot for the one outstanding wake-up timer.
///
/// Hosts that turn `next_deadline` into native timers keep the native
/// handle here. `arm` hands back the handle it displaced so the host can
/// cancel it, which keeps a single wake-up in flight however often input
/// re-arms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeSlot<H> {
    handle: Option<H>,
}

impl<H> Default for WakeSlot<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> WakeSlot<H> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { handle: None }
    }

    /// Stores `handle`, returning the displaced handle that must be cancelled.
    #[must_use = "the displaced handle must be cancelled by the host"]
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    /// Releases the stored handle after it fired or when no deadline remains.
    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_fires_once_at_deadline() {
        let mut timer = DeadlineTimer::idle();
        assert_eq!(timer.schedule(100.0, 150.0).expect("schedule"), 250.0);
        assert!(!timer.poll(249.0));
        assert!(timer.poll(250.0));
        assert!(!timer.poll(400.0));
        assert!(!timer.is_pending());
    }

    #[test]
    fn rescheduling_replaces_pending_deadline() {
        let mut timer = DeadlineTimer::idle();
        timer.schedule(0.0, 150.0).expect("first");
        timer.schedule(100.0, 150.0).expect("second");
        assert!(!timer.poll(150.0));
        assert!(timer.poll(250.0));
    }

    #[test]
    fn cancel_reports_pending_state() {
        let mut timer = DeadlineTimer::idle();
        assert!(!timer.cancel());
        timer.schedule(0.0, 10.0).expect("schedule");
        assert!(timer.cancel());
        assert!(!timer.poll(10.0));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut timer = DeadlineTimer::idle();
        assert!(timer.schedule(f64::NAN, 1.0).is_err());
        assert!(timer.schedule(0.0, -1.0).is_err());
        assert!(!timer.is_pending());
    }

    #[test]
    fn wake_slot_hands_back_displaced_handle() {
        let mut slot = WakeSlot::empty();
        assert_eq!(slot.arm(1), None);
        assert_eq!(slot.arm(2), Some(1));
        assert_eq!(slot.arm(3), Some(2));
        assert!(slot.is_armed());
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_armed());
    }

    #[test]
    fn wake_slot_burst_leaves_one_live_handle() {
        let mut slot = WakeSlot::default();
        let mut live = Vec::new();
        for handle in 0..100 {
            if let Some(stale) = slot.arm(handle) {
                live.retain(|candidate| *candidate != stale);
            }
            live.push(handle);
        }
        assert_eq!(live, vec![99]);
    }
}
