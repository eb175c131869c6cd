//! Input translation: raw keyboard, wheel and touch input become navigation
//! intents. Nothing here touches navigation state directly.

mod keyboard;
mod swipe;
mod wheel;

use serde::{Deserialize, Serialize};

pub use keyboard::NavigationKey;
pub use swipe::{Swipe, SwipeAxis, SwipeTracker, classify_swipe};
pub use wheel::{WheelAccumulator, WheelBehavior};

/// What an input asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationIntent {
    Next,
    Previous,
    First,
    Last,
    GoTo { slide: usize },
}

/// Host input event in a serializable form.
///
/// Browser hosts translate DOM events into this shape; the trace tool reads
/// sequences of it from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// `key` uses DOM `KeyboardEvent.key` names (`"ArrowRight"`, `" "`, ...).
    Key { key: String },
    Wheel { delta_y: f64 },
    TouchStart { x: f64, y: f64 },
    TouchEnd { x: f64, y: f64 },
    PrevButton,
    NextButton,
    Dot { slide: usize },
}
