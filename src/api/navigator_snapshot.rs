use serde::{Deserialize, Serialize};

use crate::core::{Deck, TransitionDirection, progress_percent};
use crate::error::DeckResult;
use crate::render::Presenter;

use super::SlideNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PendingDeadlines {
    pub scroll_reset_ms: Option<f64>,
    pub transition_unlock_ms: Option<f64>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub deck: Deck,
    pub current_slide: usize,
    pub is_animating: bool,
    pub scroll_accumulator: f64,
    pub progress_percent: f64,
    pub last_direction: Option<TransitionDirection>,
    pub now_ms: f64,
    pub pending: PendingDeadlines,
    pub frame_generation: u64,
}

impl<P: Presenter> SlideNavigator<P> {
    pub fn snapshot(&self) -> DeckResult<NavigatorSnapshot> {
        Ok(NavigatorSnapshot {
            deck: self.deck.clone(),
            current_slide: self.state.current_slide,
            is_animating: self.state.is_animating,
            scroll_accumulator: self.wheel.accumulated(),
            progress_percent: progress_percent(self.state.current_slide, self.deck.len())?,
            last_direction: self.state.last_direction,
            now_ms: self.clock.now_ms(),
            pending: PendingDeadlines {
                scroll_reset_ms: self.wheel.idle_reset_deadline(),
                transition_unlock_ms: self.unlock_timer.deadline(),
            },
            frame_generation: self.frame_generation,
        })
    }
}
