use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeckError, DeckResult};

use super::{ChartConfig, default_charts};

/// Charting capability injected by the host.
pub trait ChartBackend {
    /// Whether the mount point exists on the current page.
    fn has_mount(&self, mount_id: &str) -> bool;

    fn render_chart(&mut self, mount_id: &str, config: &ChartConfig) -> DeckResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSetupReport {
    pub rendered: Vec<String>,
    pub skipped: Vec<String>,
}

/// Renders the built-in deck charts. Missing mount points are skipped.
pub fn init_charts<B: ChartBackend>(backend: &mut B) -> DeckResult<ChartSetupReport> {
    init_charts_with(backend, default_charts())
}

/// Renders arbitrary charts keyed by mount point id.
pub fn init_charts_with<B, I, S>(backend: &mut B, charts: I) -> DeckResult<ChartSetupReport>
where
    B: ChartBackend,
    I: IntoIterator<Item = (S, ChartConfig)>,
    S: Into<String>,
{
    let mut report = ChartSetupReport::default();
    for (mount_id, config) in charts {
        let mount_id = mount_id.into();
        if !backend.has_mount(&mount_id) {
            debug!(mount_id = %mount_id, "chart mount point missing, skipping");
            report.skipped.push(mount_id);
            continue;
        }
        config.validate().map_err(|err| DeckError::Chart {
            mount_id: mount_id.clone(),
            reason: err.to_string(),
        })?;
        backend.render_chart(&mount_id, &config)?;
        debug!(mount_id = %mount_id, "chart rendered");
        report.rendered.push(mount_id);
    }
    Ok(report)
}
