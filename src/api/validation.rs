use crate::error::{DeckError, DeckResult};

use super::NavigatorConfig;

pub(super) fn validate_navigator_config(config: NavigatorConfig) -> DeckResult<NavigatorConfig> {
    if !config.transition_duration_ms.is_finite() || config.transition_duration_ms < 0.0 {
        return Err(DeckError::InvalidConfig(
            "transition_duration_ms must be finite and >= 0".to_owned(),
        ));
    }
    if !config.wheel.threshold.is_finite() || config.wheel.threshold <= 0.0 {
        return Err(DeckError::InvalidConfig(
            "wheel threshold must be finite and > 0".to_owned(),
        ));
    }
    if !config.wheel.idle_reset_ms.is_finite() || config.wheel.idle_reset_ms <= 0.0 {
        return Err(DeckError::InvalidConfig(
            "wheel idle_reset_ms must be finite and > 0".to_owned(),
        ));
    }
    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px < 0.0 {
        return Err(DeckError::InvalidConfig(
            "swipe_threshold_px must be finite and >= 0".to_owned(),
        ));
    }
    if !config.dimmed_control_opacity.is_finite()
        || !(0.0..=1.0).contains(&config.dimmed_control_opacity)
    {
        return Err(DeckError::InvalidConfig(
            "dimmed_control_opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(config)
}
