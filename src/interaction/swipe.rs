use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

use super::NavigationIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swipe {
    pub axis: SwipeAxis,
    pub intent: NavigationIntent,
}

/// Classifies a finished touch by its start-minus-end displacement.
///
/// Horizontal movement wins when it dominates and exceeds `threshold`.
/// Otherwise vertical movement beyond `threshold` counts. Dragging left or
/// up advances.
#[must_use]
pub fn classify_swipe(diff_x: f64, diff_y: f64, threshold: f64) -> Option<Swipe> {
    let step = |diff: f64| {
        if diff > 0.0 {
            NavigationIntent::Next
        } else {
            NavigationIntent::Previous
        }
    };

    if diff_x.abs() > diff_y.abs() && diff_x.abs() > threshold {
        return Some(Swipe {
            axis: SwipeAxis::Horizontal,
            intent: step(diff_x),
        });
    }
    if diff_y.abs() > threshold {
        return Some(Swipe {
            axis: SwipeAxis::Vertical,
            intent: step(diff_y),
        });
    }
    None
}

/// Pairs touch-start and touch-end positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f64, y: f64) -> DeckResult<()> {
        validate_touch_point(x, y)?;
        self.start = Some((x, y));
        Ok(())
    }

    /// Completes the gesture. A touch end without a recorded start is ignored.
    pub fn touch_end(&mut self, x: f64, y: f64, threshold: f64) -> DeckResult<Option<Swipe>> {
        validate_touch_point(x, y)?;
        let Some((start_x, start_y)) = self.start.take() else {
            return Ok(None);
        };
        Ok(classify_swipe(start_x - x, start_y - y, threshold))
    }

    #[must_use]
    pub fn is_tracking(self) -> bool {
        self.start.is_some()
    }
}

fn validate_touch_point(x: f64, y: f64) -> DeckResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(DeckError::InvalidData(
            "touch coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
