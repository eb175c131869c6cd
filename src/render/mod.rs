mod frame;
mod null_presenter;
mod primitives;

pub use frame::{ControlEmphasis, ControlState, DeckFrame, DotIndicator};
pub use null_presenter::NullPresenter;
pub use primitives::Color;

use crate::error::DeckResult;

/// Contract implemented by any presentation surface.
///
/// Surfaces receive fully materialized, validated `DeckFrame`s so DOM or
/// widget code stays isolated from navigation and input logic.
pub trait Presenter {
    /// Called once at startup with one indicator per slide.
    fn mount_dots(&mut self, dots: &[DotIndicator]) -> DeckResult<()> {
        let _ = dots;
        Ok(())
    }

    fn present(&mut self, frame: &DeckFrame) -> DeckResult<()>;
}
