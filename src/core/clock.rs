use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Host-driven monotonic clock in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonotonicClock {
    now_ms: f64,
}

impl MonotonicClock {
    #[must_use]
    pub fn now_ms(self) -> f64 {
        self.now_ms
    }

    pub fn advance_to(&mut self, now_ms: f64) -> DeckResult<()> {
        if !now_ms.is_finite() {
            return Err(DeckError::InvalidData(
                "clock time must be finite".to_owned(),
            ));
        }
        if now_ms < self.now_ms {
            return Err(DeckError::InvalidData(format!(
                "clock must not move backwards: {now_ms} < {}",
                self.now_ms
            )));
        }
        self.now_ms = now_ms;
        Ok(())
    }
}
