use serde::{Deserialize, Serialize};

use crate::core::DeadlineTimer;
use crate::error::{DeckError, DeckResult};

use super::NavigationIntent;

/// Tuning for wheel-burst accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelBehavior {
    /// Accumulated `abs(delta_y)` that triggers one navigation step.
    pub threshold: f64,
    /// Idle time after which a partial accumulation is discarded.
    pub idle_reset_ms: f64,
}

impl Default for WheelBehavior {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            idle_reset_ms: 150.0,
        }
    }
}

/// Turns a burst of wheel deltas into at most one navigation step per
/// threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelAccumulator {
    accumulated: f64,
    idle_reset: DeadlineTimer,
}

impl WheelAccumulator {
    #[must_use]
    pub fn accumulated(self) -> f64 {
        self.accumulated
    }

    #[must_use]
    pub fn idle_reset_deadline(self) -> Option<f64> {
        self.idle_reset.deadline()
    }

    /// Adds one wheel delta observed at `now_ms`.
    ///
    /// Every call re-arms the idle reset. Crossing the threshold yields
    /// `Next` for a positive sum and `Previous` for a negative one, then
    /// zeroes the accumulator.
    pub fn accumulate(
        &mut self,
        delta_y: f64,
        now_ms: f64,
        behavior: WheelBehavior,
    ) -> DeckResult<Option<NavigationIntent>> {
        if !delta_y.is_finite() {
            return Err(DeckError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        self.idle_reset.schedule(now_ms, behavior.idle_reset_ms)?;
        self.accumulated += delta_y;

        if self.accumulated.abs() < behavior.threshold {
            return Ok(None);
        }
        let intent = if self.accumulated > 0.0 {
            NavigationIntent::Next
        } else {
            NavigationIntent::Previous
        };
        self.accumulated = 0.0;
        Ok(Some(intent))
    }

    /// Zeroes the accumulator when the idle deadline passed.
    ///
    /// Returns the discarded amount when the reset fired.
    pub fn poll_idle_reset(&mut self, now_ms: f64) -> Option<f64> {
        if !self.idle_reset.poll(now_ms) {
            return None;
        }
        Some(std::mem::take(&mut self.accumulated))
    }
}
