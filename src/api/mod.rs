mod frame_builder;
mod input_controller;
mod json_contract;
mod navigation_controller;
mod navigation_state;
mod navigator;
mod navigator_config;
mod navigator_init;
mod navigator_snapshot;
mod plugin_dispatch;
mod plugin_registry;
mod timer_controller;
mod trace_replay;
mod validation;

pub use crate::extensions::{IgnoreReason, NavigatorEvent, NavigatorPlugin, PluginContext};
pub use input_controller::InputResponse;
pub use json_contract::{NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1, NavigatorSnapshotJsonContractV1};
pub use navigation_controller::NavigationOutcome;
pub use navigator::SlideNavigator;
pub use navigator_config::NavigatorConfig;
pub use navigator_snapshot::{NavigatorSnapshot, PendingDeadlines};
pub use timer_controller::TimerFired;
pub use trace_replay::{NavigatorTrace, ReplayReport, ReplayStep, TraceStep};
