use crate::core::{DeadlineTimer, Deck, MonotonicClock, TransitionDirection};
use crate::error::DeckResult;
use crate::extensions::NavigatorPlugin;
use crate::interaction::{SwipeTracker, WheelAccumulator};
use crate::render::{DeckFrame, DotIndicator, Presenter};

use super::NavigatorConfig;
use super::navigation_state::NavigationState;

/// Main navigation facade consumed by host applications.
///
/// `SlideNavigator` owns the navigation model, input accumulators and
/// timers, and pushes a fresh `DeckFrame` to its presenter after every
/// successful navigation. It never reads a wall clock: hosts advance time
/// through `tick`.
pub struct SlideNavigator<P: Presenter> {
    pub(super) presenter: P,
    pub(super) deck: Deck,
    pub(super) config: NavigatorConfig,
    pub(super) state: NavigationState,
    pub(super) clock: MonotonicClock,
    pub(super) wheel: WheelAccumulator,
    pub(super) swipe: SwipeTracker,
    pub(super) unlock_timer: DeadlineTimer,
    pub(super) plugins: Vec<Box<dyn NavigatorPlugin>>,
    pub(super) frame_generation: u64,
}

impl<P: Presenter> SlideNavigator<P> {
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.state.current_slide
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    #[must_use]
    pub fn scroll_accumulator(&self) -> f64 {
        self.wheel.accumulated()
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<TransitionDirection> {
        self.state.last_direction
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Replaces tuning and re-presents so control emphasis picks up changes.
    pub fn set_config(&mut self, config: NavigatorConfig) -> DeckResult<()> {
        super::validation::validate_navigator_config(config)?;
        self.config = config;
        self.present_frame()
    }

    #[must_use]
    pub fn dots(&self) -> Vec<DotIndicator> {
        DotIndicator::for_deck(self.deck.len())
    }

    /// Number of frames presented so far, including the startup frame.
    #[must_use]
    pub fn frame_generation(&self) -> u64 {
        self.frame_generation
    }

    /// Builds the frame for the current state without presenting it.
    pub fn frame(&self) -> DeckResult<DeckFrame> {
        self.build_frame()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub(super) fn present_frame(&mut self) -> DeckResult<()> {
        let frame = self.build_frame()?;
        self.presenter.present(&frame)?;
        self.frame_generation += 1;
        self.emit_event(crate::extensions::NavigatorEvent::Presented {
            generation: self.frame_generation,
        });
        Ok(())
    }
}
