use indexmap::IndexMap;

use crate::error::{DeckError, DeckResult};
use crate::render::Color;

use super::{
    AnnotationLabel, AnnotationLabelPosition, AnnotationOptions, AxisPosition, AxisTitle,
    BarDataset, ChartConfig, ChartData, ChartOptions, ChartType, FontSpec, GridOptions,
    InteractionOptions, LegendLabels, LegendOptions, LegendPosition, LineAnnotation,
    PluginOptions, ScaleOptions, ScaleType, TickOptions, TitleOptions, TooltipMode,
};

pub const ASR_CHART_MOUNT_ID: &str = "chartASR";
pub const QUANT_VRAM_CHART_MOUNT_ID: &str = "chartQuantVRAM";

const BLUE: Color = Color::rgb(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0);
const VIOLET: Color = Color::rgb(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0);
const GREEN: Color = Color::rgb(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0);
const RED: Color = Color::rgb(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0);
const SLATE_700: Color = Color::rgb(51.0 / 255.0, 65.0 / 255.0, 85.0 / 255.0);
const SLATE_500: Color = Color::rgb(100.0 / 255.0, 116.0 / 255.0, 139.0 / 255.0);

/// T4 GPU memory ceiling drawn on the quantization chart.
const T4_VRAM_LIMIT_GB: f64 = 16.0;

fn title(text: &str) -> TitleOptions {
    TitleOptions {
        display: true,
        text: text.to_owned(),
        font: FontSpec::sized(14.0).with_weight("600"),
        color: SLATE_700,
    }
}

fn bottom_legend() -> LegendOptions {
    LegendOptions {
        position: LegendPosition::Bottom,
        labels: LegendLabels {
            color: SLATE_500,
            font: FontSpec::sized(11.0),
        },
    }
}

fn ticks(color: Color) -> TickOptions {
    TickOptions {
        color,
        font: FontSpec::sized(10.0),
    }
}

fn axis_title(text: &str, color: Color) -> AxisTitle {
    AxisTitle {
        display: true,
        text: text.to_owned(),
        color,
        font: FontSpec::sized(11.0),
    }
}

fn category_axis() -> ScaleOptions {
    ScaleOptions {
        grid: GridOptions {
            display: Some(false),
            ..GridOptions::default()
        },
        ..ScaleOptions::with_ticks(ticks(SLATE_500))
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|label| (*label).to_owned()).collect()
}

/// Speech-recognition model comparison: runtime on the left axis, VRAM on
/// the right.
#[must_use]
pub fn asr_comparison_chart() -> ChartConfig {
    let mut scales = IndexMap::new();
    scales.insert("x".to_owned(), category_axis());
    scales.insert(
        "y".to_owned(),
        ScaleOptions {
            scale_type: Some(ScaleType::Linear),
            display: Some(true),
            position: Some(AxisPosition::Left),
            title: Some(axis_title("Tempo (s)", BLUE)),
            grid: GridOptions {
                color: Some(BLUE.with_alpha(0.1)),
                ..GridOptions::default()
            },
            ..ScaleOptions::with_ticks(ticks(BLUE))
        },
    );
    scales.insert(
        "y1".to_owned(),
        ScaleOptions {
            scale_type: Some(ScaleType::Linear),
            display: Some(true),
            position: Some(AxisPosition::Right),
            title: Some(axis_title("VRAM (GB)", VIOLET)),
            grid: GridOptions {
                draw_on_chart_area: Some(false),
                ..GridOptions::default()
            },
            ..ScaleOptions::with_ticks(ticks(VIOLET))
        },
    );

    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: labels(&["Tiny (39M)", "Small (244M)", "Large (1.5B)"]),
            datasets: vec![
                BarDataset::tinted("Tempo (s)", vec![89.0, 152.0, 382.0], BLUE).on_axis("y"),
                BarDataset::tinted("VRAM (GB)", vec![0.18, 0.82, 4.25], VIOLET).on_axis("y1"),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: true,
            interaction: Some(InteractionOptions {
                mode: TooltipMode::Index,
                intersect: false,
            }),
            plugins: PluginOptions {
                title: title("ASR: Tempo vs VRAM por Modelo"),
                legend: bottom_legend(),
                annotation: None,
            },
            scales,
        },
    }
}

/// VRAM use per language model at full precision and 4-bit quantization,
/// capped at the T4 memory limit.
#[must_use]
pub fn quantization_vram_chart() -> ChartConfig {
    let mut scales = IndexMap::new();
    scales.insert("x".to_owned(), category_axis());
    scales.insert(
        "y".to_owned(),
        ScaleOptions {
            begin_at_zero: Some(true),
            max: Some(T4_VRAM_LIMIT_GB),
            title: Some(axis_title("VRAM (GB)", SLATE_700)),
            grid: GridOptions {
                color: Some(SLATE_500.with_alpha(0.1)),
                ..GridOptions::default()
            },
            ..ScaleOptions::with_ticks(ticks(SLATE_500))
        },
    );

    let mut annotations = IndexMap::new();
    annotations.insert(
        "line1".to_owned(),
        LineAnnotation::horizontal(
            T4_VRAM_LIMIT_GB,
            RED.with_alpha(0.7),
            AnnotationLabel {
                display: true,
                content: "Limite T4 (16GB)".to_owned(),
                position: AnnotationLabelPosition::End,
            },
        ),
    );

    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: labels(&["Qwen 0.5B", "Qwen 1.5B", "Phi-3 (3.8B)", "Mistral (7B)"]),
            datasets: vec![
                BarDataset::tinted("Full Precision", vec![1.0, 3.0, 8.2, 14.1], BLUE),
                BarDataset::tinted("4-bit NF4", vec![0.6, 1.2, 3.6, 4.6], GREEN),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: true,
            interaction: None,
            plugins: PluginOptions {
                title: title("Quantização: VRAM (GB)"),
                legend: bottom_legend(),
                annotation: Some(AnnotationOptions { annotations }),
            },
            scales,
        },
    }
}

/// Both deck charts keyed by their mount point id, in render order.
#[must_use]
pub fn default_charts() -> Vec<(&'static str, ChartConfig)> {
    vec![
        (ASR_CHART_MOUNT_ID, asr_comparison_chart()),
        (QUANT_VRAM_CHART_MOUNT_ID, quantization_vram_chart()),
    ]
}

/// Both deck charts as one JSON object keyed by mount point id.
pub fn default_charts_json_pretty() -> DeckResult<String> {
    let charts: IndexMap<&str, ChartConfig> = default_charts().into_iter().collect();
    serde_json::to_string_pretty(&charts)
        .map_err(|e| DeckError::InvalidData(format!("failed to serialize charts: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for (mount_id, chart) in default_charts() {
            chart
                .validate()
                .unwrap_or_else(|err| panic!("{mount_id} should validate: {err}"));
        }
    }
}
