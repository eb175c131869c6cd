use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::DeckResult;
use crate::extensions::NavigatorEvent;
use crate::render::Presenter;

use super::SlideNavigator;

/// Timer that fired during one `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerFired {
    ScrollReset { discarded: f64 },
    TransitionUnlocked { slide: usize },
}

impl<P: Presenter> SlideNavigator<P> {
    /// Advances the navigator clock and fires due timers.
    ///
    /// `now_ms` must be finite and must not move backwards.
    pub fn tick(&mut self, now_ms: f64) -> DeckResult<SmallVec<[TimerFired; 2]>> {
        self.clock.advance_to(now_ms)?;
        let mut fired = SmallVec::new();

        if let Some(discarded) = self.wheel.poll_idle_reset(now_ms) {
            trace!(discarded, "scroll accumulator reset after idle");
            self.emit_event(NavigatorEvent::ScrollAccumulatorReset { discarded });
            fired.push(TimerFired::ScrollReset { discarded });
        }

        if self.unlock_timer.poll(now_ms) {
            self.state.is_animating = false;
            let slide = self.state.current_slide;
            trace!(slide, "transition lock released");
            self.emit_event(NavigatorEvent::TransitionSettled { slide });
            fired.push(TimerFired::TransitionUnlocked { slide });
        }

        Ok(fired)
    }

    /// Earliest pending timer deadline, if any.
    ///
    /// Hosts without a frame loop use it to schedule their next `tick`.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.wheel.idle_reset_deadline(), self.unlock_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
