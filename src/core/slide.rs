use serde::{Deserialize, Serialize};

/// Presentational capability a slide may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    #[default]
    Content,
    /// Title-style slide rendered on a dark background.
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub kind: SlideKind,
}

impl Slide {
    #[must_use]
    pub const fn new(kind: SlideKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn content() -> Self {
        Self::new(SlideKind::Content)
    }

    #[must_use]
    pub const fn title() -> Self {
        Self::new(SlideKind::Title)
    }

    #[must_use]
    pub fn is_title(self) -> bool {
        self.kind == SlideKind::Title
    }
}

/// Visual state of one slide relative to the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideVisualState {
    #[default]
    Default,
    Active,
    /// Slide sits before the active one and transitions out to the left.
    Prev,
}

impl SlideVisualState {
    /// Resolves the state of `slide_index` when `active_index` is shown.
    ///
    /// Both indices are 1-based.
    #[must_use]
    pub fn for_position(slide_index: usize, active_index: usize) -> Self {
        if slide_index == active_index {
            Self::Active
        } else if slide_index < active_index {
            Self::Prev
        } else {
            Self::Default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    Forward,
    Backward,
}

impl TransitionDirection {
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}
