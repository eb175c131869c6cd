use tracing::debug;

use crate::core::{DeadlineTimer, Deck, MonotonicClock};
use crate::error::DeckResult;
use crate::interaction::{SwipeTracker, WheelAccumulator};
use crate::render::{DotIndicator, Presenter};

use super::navigation_state::NavigationState;
use super::validation::validate_navigator_config;
use super::{NavigatorConfig, SlideNavigator};

impl<P: Presenter> SlideNavigator<P> {
    /// Creates a navigator positioned on slide 1.
    ///
    /// Mounts one dot per slide and presents the startup frame before
    /// returning.
    pub fn new(presenter: P, deck: Deck, config: NavigatorConfig) -> DeckResult<Self> {
        let config = validate_navigator_config(config)?;

        let mut navigator = Self {
            presenter,
            deck,
            config,
            state: NavigationState::default(),
            clock: MonotonicClock::default(),
            wheel: WheelAccumulator::default(),
            swipe: SwipeTracker::default(),
            unlock_timer: DeadlineTimer::idle(),
            plugins: Vec::new(),
            frame_generation: 0,
        };

        let dots = DotIndicator::for_deck(navigator.deck.len());
        navigator.presenter.mount_dots(&dots)?;
        navigator.present_frame()?;

        debug!(total_slides = navigator.deck.len(), "slide navigator initialized");
        Ok(navigator)
    }

    /// Creates a navigator with default tuning.
    pub fn with_defaults(presenter: P, deck: Deck) -> DeckResult<Self> {
        Self::new(presenter, deck, NavigatorConfig::default())
    }
}
