use crate::error::DeckResult;
use crate::render::{DeckFrame, DotIndicator, Presenter};

/// Headless presenter used by tests and tooling.
///
/// It still validates every frame so tests catch inconsistent UI state
/// before a real surface is attached.
#[derive(Debug, Default)]
pub struct NullPresenter {
    pub mounted_dots: Vec<DotIndicator>,
    pub presented_frames: usize,
    pub last_frame: Option<DeckFrame>,
}

impl Presenter for NullPresenter {
    fn mount_dots(&mut self, dots: &[DotIndicator]) -> DeckResult<()> {
        self.mounted_dots = dots.to_vec();
        Ok(())
    }

    fn present(&mut self, frame: &DeckFrame) -> DeckResult<()> {
        frame.validate()?;
        self.presented_frames += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
