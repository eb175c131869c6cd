use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
}

/// Full chart definition handed to a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    /// Key into `ChartOptions::scales` for the value axis.
    #[serde(rename = "yAxisID", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl BarDataset {
    /// Dataset with a translucent fill and an opaque border of the same hue.
    #[must_use]
    pub fn tinted(label: impl Into<String>, data: Vec<f64>, base: Color) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: base.with_alpha(0.8),
            border_color: base.with_alpha(1.0),
            border_width: 1.0,
            y_axis_id: None,
        }
    }

    #[must_use]
    pub fn on_axis(mut self, axis_id: impl Into<String>) -> Self {
        self.y_axis_id = Some(axis_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionOptions>,
    pub plugins: PluginOptions,
    pub scales: IndexMap<String, ScaleOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    Index,
    Nearest,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub mode: TooltipMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl FontSpec {
    #[must_use]
    pub fn sized(size: f64) -> Self {
        Self { size, weight: None }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<AnnotationOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: Color,
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationOptions {
    pub annotations: IndexMap<String, LineAnnotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLabelPosition {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    pub display: bool,
    pub content: String,
    pub position: AnnotationLabelPosition,
}

/// Horizontal reference line drawn across the chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnnotation {
    #[serde(rename = "type")]
    pub kind: String,
    pub y_min: f64,
    pub y_max: f64,
    pub border_color: Color,
    pub border_width: f64,
    pub border_dash: Vec<f64>,
    pub label: AnnotationLabel,
}

impl LineAnnotation {
    #[must_use]
    pub fn horizontal(value: f64, border_color: Color, label: AnnotationLabel) -> Self {
        Self {
            kind: "line".to_owned(),
            y_min: value,
            y_max: value,
            border_color,
            border_width: 2.0,
            border_dash: vec![5.0, 5.0],
            label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: Color,
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOptions {
    pub color: Color,
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub ticks: TickOptions,
    #[serde(default)]
    pub grid: GridOptions,
}

impl ScaleOptions {
    #[must_use]
    pub fn with_ticks(ticks: TickOptions) -> Self {
        Self {
            scale_type: None,
            display: None,
            position: None,
            begin_at_zero: None,
            max: None,
            title: None,
            ticks,
            grid: GridOptions::default(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> DeckResult<()> {
        if self.data.labels.is_empty() {
            return Err(DeckError::InvalidData(
                "chart must declare at least one label".to_owned(),
            ));
        }
        for dataset in &self.data.datasets {
            if dataset.data.len() != self.data.labels.len() {
                return Err(DeckError::InvalidData(format!(
                    "dataset `{}` has {} values for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.data.labels.len()
                )));
            }
            if dataset.data.iter().any(|value| !value.is_finite()) {
                return Err(DeckError::InvalidData(format!(
                    "dataset `{}` contains non-finite values",
                    dataset.label
                )));
            }
            if !dataset.border_width.is_finite() || dataset.border_width < 0.0 {
                return Err(DeckError::InvalidData(format!(
                    "dataset `{}` border width must be finite and >= 0",
                    dataset.label
                )));
            }
            dataset.background_color.validate()?;
            dataset.border_color.validate()?;
            if let Some(axis_id) = &dataset.y_axis_id {
                if !self.options.scales.contains_key(axis_id) {
                    return Err(DeckError::InvalidData(format!(
                        "dataset `{}` references unknown axis `{axis_id}`",
                        dataset.label
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn to_json_value(&self) -> DeckResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| DeckError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
