//! Static bar-chart definitions and the port used to hand them to a
//! charting backend.
//!
//! Chart configuration is pure data. It serializes to the JSON shape
//! Chart.js expects, so browser hosts can pass it through unchanged.

mod config;
mod presets;
mod recording_backend;
mod setup;

pub use config::{
    AnnotationLabel, AnnotationLabelPosition, AnnotationOptions, AxisPosition, AxisTitle,
    BarDataset, ChartConfig, ChartData, ChartOptions, ChartType, FontSpec, GridOptions,
    InteractionOptions, LegendLabels, LegendOptions, LegendPosition, LineAnnotation,
    PluginOptions, ScaleOptions, ScaleType, TickOptions, TitleOptions, TooltipMode,
};
pub use presets::{
    ASR_CHART_MOUNT_ID, QUANT_VRAM_CHART_MOUNT_ID, asr_comparison_chart, default_charts,
    default_charts_json_pretty, quantization_vram_chart,
};
pub use recording_backend::RecordingChartBackend;
pub use setup::{ChartBackend, ChartSetupReport, init_charts, init_charts_with};
