use serde::{Deserialize, Serialize};

use crate::core::Deck;
use crate::error::{DeckError, DeckResult};
use crate::interaction::InputEvent;
use crate::render::{DeckFrame, NullPresenter};

use super::{InputResponse, NavigatorConfig, NavigatorSnapshot, SlideNavigator, TimerFired};

/// Timestamped input sequence replayed against a headless navigator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorTrace {
    pub trace_name: String,
    pub deck: Deck,
    #[serde(default)]
    pub config: NavigatorConfig,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub at_ms: f64,
    /// `None` only advances the clock.
    #[serde(default)]
    pub event: Option<InputEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub trace_name: String,
    pub steps: Vec<ReplayStep>,
    pub final_frame: DeckFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub at_ms: f64,
    pub event: Option<InputEvent>,
    pub timers_fired: Vec<TimerFired>,
    pub response: Option<InputResponse>,
    pub snapshot: NavigatorSnapshot,
}

impl NavigatorTrace {
    pub fn from_json_str(input: &str) -> DeckResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DeckError::InvalidData(format!("failed to parse trace: {e}")))
    }

    /// Ticks to each step's time, dispatches its event and records the
    /// resulting state.
    pub fn replay(self) -> DeckResult<ReplayReport> {
        let mut navigator =
            SlideNavigator::new(NullPresenter::default(), self.deck, self.config)?;
        let at_step = |index: usize| {
            move |err: DeckError| DeckError::InvalidData(format!("trace step {index}: {err}"))
        };

        let mut steps = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.into_iter().enumerate() {
            let timers_fired = navigator.tick(step.at_ms).map_err(at_step(index))?.into_vec();
            let response = step
                .event
                .as_ref()
                .map(|event| navigator.dispatch(event))
                .transpose()
                .map_err(at_step(index))?;
            steps.push(ReplayStep {
                at_ms: step.at_ms,
                event: step.event,
                timers_fired,
                response,
                snapshot: navigator.snapshot()?,
            });
        }

        Ok(ReplayReport {
            trace_name: self.trace_name,
            steps,
            final_frame: navigator.frame()?,
        })
    }
}

impl ReplayReport {
    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::InvalidData(format!("failed to serialize replay report: {e}")))
    }
}
