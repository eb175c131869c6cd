//! Observer hooks for host-side extensions.
//!
//! Extensions observe navigation but never mutate navigator internals.

pub mod plugins;

pub use plugins::{IgnoreReason, NavigatorEvent, NavigatorPlugin, PluginContext};
