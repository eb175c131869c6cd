use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};
use crate::interaction::WheelBehavior;

/// Public navigator tuning.
///
/// This type is serializable so hosts can ship deck tuning alongside their
/// content without inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Length of the transition lock after each successful navigation.
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub wheel: WheelBehavior,
    /// Minimum travel for a touch gesture to count as a swipe.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    /// Opacity of the prev/next control at the matching deck edge.
    #[serde(default = "default_dimmed_control_opacity")]
    pub dimmed_control_opacity: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_duration_ms(),
            wheel: WheelBehavior::default(),
            swipe_threshold_px: default_swipe_threshold_px(),
            dimmed_control_opacity: default_dimmed_control_opacity(),
        }
    }
}

impl NavigatorConfig {
    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_wheel_behavior(mut self, wheel: WheelBehavior) -> Self {
        self.wheel = wheel;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_dimmed_control_opacity(mut self, opacity: f64) -> Self {
        self.dimmed_control_opacity = opacity;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> DeckResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| DeckError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> DeckResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DeckError::InvalidData(format!("failed to parse config: {e}")))?;
        super::validation::validate_navigator_config(config)
    }
}

fn default_transition_duration_ms() -> f64 {
    400.0
}

fn default_swipe_threshold_px() -> f64 {
    50.0
}

fn default_dimmed_control_opacity() -> f64 {
    0.3
}
