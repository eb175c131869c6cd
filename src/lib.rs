//! deck-rs: slide-deck navigation controller.
//!
//! The crate keeps navigation logic headless and deterministic. Hosts feed
//! input events and clock ticks into a `SlideNavigator` and receive fully
//! materialized frames through the `Presenter` port.

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{NavigatorConfig, SlideNavigator};
pub use error::{DeckError, DeckResult};
