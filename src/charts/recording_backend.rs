use crate::error::DeckResult;

use super::{ChartBackend, ChartConfig};

/// Headless chart backend that records what it was asked to render.
#[derive(Debug, Default)]
pub struct RecordingChartBackend {
    pub mounts: Vec<String>,
    pub rendered: Vec<(String, ChartConfig)>,
}

impl RecordingChartBackend {
    #[must_use]
    pub fn with_mounts<I, S>(mounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mounts: mounts.into_iter().map(Into::into).collect(),
            rendered: Vec::new(),
        }
    }
}

impl ChartBackend for RecordingChartBackend {
    fn has_mount(&self, mount_id: &str) -> bool {
        self.mounts.iter().any(|mount| mount == mount_id)
    }

    fn render_chart(&mut self, mount_id: &str, config: &ChartConfig) -> DeckResult<()> {
        self.rendered.push((mount_id.to_owned(), config.clone()));
        Ok(())
    }
}
