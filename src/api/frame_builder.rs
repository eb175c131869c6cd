use crate::core::{counter_text, progress_percent};
use crate::error::DeckResult;
use crate::render::{ControlState, DeckFrame, Presenter};

use super::SlideNavigator;

impl<P: Presenter> SlideNavigator<P> {
    pub(super) fn build_frame(&self) -> DeckResult<DeckFrame> {
        let current = self.state.current_slide;
        let total = self.deck.len();
        let edge_control = |at_edge: bool| {
            if at_edge {
                ControlState::dimmed(self.config.dimmed_control_opacity)
            } else {
                ControlState::full()
            }
        };

        Ok(DeckFrame {
            current_slide: current,
            total_slides: total,
            counter_text: counter_text(current, total),
            progress_percent: progress_percent(current, total)?,
            slide_states: self.deck.visual_states(current),
            active_dot: current,
            prev_control: edge_control(current == 1),
            next_control: edge_control(current == total),
            on_dark: self.deck.is_title(current),
            direction: self.state.last_direction,
        })
    }
}
