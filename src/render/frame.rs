use serde::{Deserialize, Serialize};

use crate::core::{SlideVisualState, TransitionDirection};
use crate::error::{DeckError, DeckResult};

/// Visual weight of the previous/next controls. Controls stay clickable in
/// both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlEmphasis {
    Full,
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub emphasis: ControlEmphasis,
    pub opacity: f64,
}

impl ControlState {
    #[must_use]
    pub fn full() -> Self {
        Self {
            emphasis: ControlEmphasis::Full,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn dimmed(opacity: f64) -> Self {
        Self {
            emphasis: ControlEmphasis::Dimmed,
            opacity,
        }
    }
}

/// One clickable position marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotIndicator {
    /// 1-based slide the dot navigates to.
    pub slide: usize,
    pub aria_label: String,
}

impl DotIndicator {
    #[must_use]
    pub fn for_slide(slide: usize) -> Self {
        Self {
            slide,
            aria_label: format!("Go to slide {slide}"),
        }
    }

    #[must_use]
    pub fn for_deck(total_slides: usize) -> Vec<Self> {
        (1..=total_slides).map(Self::for_slide).collect()
    }
}

/// Complete UI state for one refresh of the deck chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckFrame {
    pub current_slide: usize,
    pub total_slides: usize,
    pub counter_text: String,
    pub progress_percent: f64,
    pub slide_states: Vec<SlideVisualState>,
    /// 1-based index of the single active dot.
    pub active_dot: usize,
    pub prev_control: ControlState,
    pub next_control: ControlState,
    pub on_dark: bool,
    /// Direction of the transition that produced this frame; `None` at startup.
    pub direction: Option<TransitionDirection>,
}

impl DeckFrame {
    /// CSS width value for the progress bar, e.g. `"25%"`.
    #[must_use]
    pub fn progress_css_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }

    #[must_use]
    pub fn active_slide_count(&self) -> usize {
        self.slide_states
            .iter()
            .filter(|state| **state == SlideVisualState::Active)
            .count()
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.total_slides == 0 || self.slide_states.len() != self.total_slides {
            return Err(DeckError::InvalidData(format!(
                "frame carries {} slide states for {} slides",
                self.slide_states.len(),
                self.total_slides
            )));
        }
        if !(1..=self.total_slides).contains(&self.current_slide) {
            return Err(DeckError::InvalidData(format!(
                "current slide {} is outside 1..={}",
                self.current_slide, self.total_slides
            )));
        }
        if self.active_slide_count() != 1
            || self.slide_states[self.current_slide - 1] != SlideVisualState::Active
        {
            return Err(DeckError::InvalidData(
                "frame must mark exactly the current slide as active".to_owned(),
            ));
        }
        if self.active_dot != self.current_slide {
            return Err(DeckError::InvalidData(format!(
                "active dot {} does not match current slide {}",
                self.active_dot, self.current_slide
            )));
        }
        if !self.progress_percent.is_finite() || !(0.0..=100.0).contains(&self.progress_percent)
        {
            return Err(DeckError::InvalidData(
                "progress must be finite and in [0, 100]".to_owned(),
            ));
        }
        for (name, control) in [("prev", self.prev_control), ("next", self.next_control)] {
            if !control.opacity.is_finite() || !(0.0..=1.0).contains(&control.opacity) {
                return Err(DeckError::InvalidData(format!(
                    "{name} control opacity must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
