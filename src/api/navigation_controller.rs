use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::TransitionDirection;
use crate::error::DeckResult;
use crate::extensions::{IgnoreReason, NavigatorEvent};
use crate::interaction::NavigationIntent;
use crate::render::Presenter;

use super::SlideNavigator;

/// Result of one navigation request.
///
/// Rejected requests are not errors: out-of-range targets, the already
/// active slide and requests during a transition are absorbed as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationOutcome {
    Moved {
        from: usize,
        to: usize,
        direction: TransitionDirection,
    },
    Ignored {
        target: usize,
        reason: IgnoreReason,
    },
}

impl NavigationOutcome {
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

impl<P: Presenter> SlideNavigator<P> {
    /// Navigates to the 1-based `target` slide.
    ///
    /// On success the transition lock is held for
    /// `NavigatorConfig::transition_duration_ms` and a fresh frame is
    /// presented. Errors only come from the presenter.
    pub fn go_to_slide(&mut self, target: usize) -> DeckResult<NavigationOutcome> {
        let from = self.state.current_slide;
        if let Some(reason) = self.rejection_reason(target) {
            debug!(target, from, ?reason, "navigation ignored");
            self.emit_event(NavigatorEvent::NavigationIgnored { target, reason });
            return Ok(NavigationOutcome::Ignored { target, reason });
        }

        let direction = TransitionDirection::between(from, target);
        self.unlock_timer
            .schedule(self.clock.now_ms(), self.config.transition_duration_ms)?;
        self.state.is_animating = true;
        self.state.current_slide = target;
        self.state.last_direction = Some(direction);

        debug!(from, to = target, ?direction, "slide changed");
        self.emit_event(NavigatorEvent::SlideChanged {
            from,
            to: target,
            direction,
        });
        self.present_frame()?;

        Ok(NavigationOutcome::Moved {
            from,
            to: target,
            direction,
        })
    }

    pub fn next_slide(&mut self) -> DeckResult<NavigationOutcome> {
        self.go_to_slide(self.state.current_slide + 1)
    }

    pub fn prev_slide(&mut self) -> DeckResult<NavigationOutcome> {
        self.go_to_slide(self.state.current_slide.saturating_sub(1))
    }

    pub fn first_slide(&mut self) -> DeckResult<NavigationOutcome> {
        self.go_to_slide(1)
    }

    pub fn last_slide(&mut self) -> DeckResult<NavigationOutcome> {
        self.go_to_slide(self.deck.len())
    }

    pub fn apply_intent(&mut self, intent: NavigationIntent) -> DeckResult<NavigationOutcome> {
        match intent {
            NavigationIntent::Next => self.next_slide(),
            NavigationIntent::Previous => self.prev_slide(),
            NavigationIntent::First => self.first_slide(),
            NavigationIntent::Last => self.last_slide(),
            NavigationIntent::GoTo { slide } => self.go_to_slide(slide),
        }
    }

    fn rejection_reason(&self, target: usize) -> Option<IgnoreReason> {
        if !self.deck.contains(target) {
            Some(IgnoreReason::OutOfRange)
        } else if target == self.state.current_slide {
            Some(IgnoreReason::AlreadyActive)
        } else if self.state.is_animating {
            Some(IgnoreReason::TransitionInProgress)
        } else {
            None
        }
    }
}
