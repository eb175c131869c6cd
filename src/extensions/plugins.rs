use serde::{Deserialize, Serialize};

use crate::core::TransitionDirection;

/// Why a navigation request was absorbed without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    OutOfRange,
    AlreadyActive,
    TransitionInProgress,
}

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub current_slide: usize,
    pub total_slides: usize,
    pub is_animating: bool,
    pub scroll_accumulator: f64,
    pub now_ms: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigatorEvent {
    SlideChanged {
        from: usize,
        to: usize,
        direction: TransitionDirection,
    },
    NavigationIgnored {
        target: usize,
        reason: IgnoreReason,
    },
    /// The transition lock was released.
    TransitionSettled { slide: usize },
    /// Idle wheel input discarded a partial accumulation.
    ScrollAccumulatorReset { discarded: f64 },
    Presented { generation: u64 },
}

/// Extension hook interface for bounded custom logic.
pub trait NavigatorPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: NavigatorEvent, context: PluginContext);
}
