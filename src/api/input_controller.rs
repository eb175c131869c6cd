use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::DeckResult;
use crate::interaction::{InputEvent, NavigationKey};
use crate::render::Presenter;

use super::{NavigationOutcome, SlideNavigator};

/// How the navigator consumed one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputResponse {
    /// The host should suppress the event's default action.
    pub prevent_default: bool,
    /// Set when the input resolved to a navigation request.
    pub outcome: Option<NavigationOutcome>,
}

impl InputResponse {
    fn passive(outcome: Option<NavigationOutcome>) -> Self {
        Self {
            prevent_default: false,
            outcome,
        }
    }

    #[must_use]
    pub fn moved(self) -> bool {
        self.outcome.is_some_and(NavigationOutcome::is_moved)
    }
}

impl<P: Presenter> SlideNavigator<P> {
    /// Handles a DOM `KeyboardEvent.key` value.
    ///
    /// Navigation keys are always reported as handled, even when the request
    /// itself is ignored at a deck edge or during a transition.
    pub fn handle_key(&mut self, key: &str) -> DeckResult<InputResponse> {
        let Some(key) = NavigationKey::from_dom_key(key) else {
            return Ok(InputResponse::default());
        };
        let outcome = self.apply_intent(key.intent())?;
        Ok(InputResponse {
            prevent_default: true,
            outcome: Some(outcome),
        })
    }

    /// Feeds one wheel delta. Ignored entirely while a transition runs.
    pub fn handle_wheel(&mut self, delta_y: f64) -> DeckResult<Option<NavigationOutcome>> {
        if self.state.is_animating {
            trace!(delta_y, "wheel ignored during transition");
            return Ok(None);
        }
        let behavior = self.config.wheel;
        let Some(intent) = self
            .wheel
            .accumulate(delta_y, self.clock.now_ms(), behavior)?
        else {
            return Ok(None);
        };
        debug!(?intent, "wheel threshold crossed");
        self.apply_intent(intent).map(Some)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) -> DeckResult<()> {
        self.swipe.touch_start(x, y)
    }

    pub fn touch_end(&mut self, x: f64, y: f64) -> DeckResult<Option<NavigationOutcome>> {
        let Some(swipe) = self
            .swipe
            .touch_end(x, y, self.config.swipe_threshold_px)?
        else {
            return Ok(None);
        };
        debug!(axis = ?swipe.axis, intent = ?swipe.intent, "swipe recognized");
        self.apply_intent(swipe.intent).map(Some)
    }

    pub fn click_prev(&mut self) -> DeckResult<NavigationOutcome> {
        self.prev_slide()
    }

    pub fn click_next(&mut self) -> DeckResult<NavigationOutcome> {
        self.next_slide()
    }

    /// Handles a click on the dot for the 1-based `slide`.
    pub fn click_dot(&mut self, slide: usize) -> DeckResult<NavigationOutcome> {
        self.go_to_slide(slide)
    }

    /// Routes a serializable input event to its handler.
    pub fn dispatch(&mut self, event: &InputEvent) -> DeckResult<InputResponse> {
        match event {
            InputEvent::Key { key } => self.handle_key(key),
            InputEvent::Wheel { delta_y } => self.handle_wheel(*delta_y).map(InputResponse::passive),
            InputEvent::TouchStart { x, y } => {
                self.touch_start(*x, *y)?;
                Ok(InputResponse::default())
            }
            InputEvent::TouchEnd { x, y } => self.touch_end(*x, *y).map(InputResponse::passive),
            InputEvent::PrevButton => self.click_prev().map(|o| InputResponse::passive(Some(o))),
            InputEvent::NextButton => self.click_next().map(|o| InputResponse::passive(Some(o))),
            InputEvent::Dot { slide } => self
                .click_dot(*slide)
                .map(|o| InputResponse::passive(Some(o))),
        }
    }
}
