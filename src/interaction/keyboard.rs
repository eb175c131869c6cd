use serde::{Deserialize, Serialize};

use super::NavigationIntent;

/// Keys that drive navigation. Every other key is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKey {
    ArrowRight,
    ArrowDown,
    Space,
    ArrowLeft,
    ArrowUp,
    Home,
    End,
}

impl NavigationKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowDown" => Some(Self::ArrowDown),
            " " | "Spacebar" => Some(Self::Space),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    #[must_use]
    pub fn intent(self) -> NavigationIntent {
        match self {
            Self::ArrowRight | Self::ArrowDown | Self::Space => NavigationIntent::Next,
            Self::ArrowLeft | Self::ArrowUp => NavigationIntent::Previous,
            Self::Home => NavigationIntent::First,
            Self::End => NavigationIntent::Last,
        }
    }
}
