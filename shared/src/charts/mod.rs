//! Chart configurations
//!
//! Serializable configs in the shape Chart.js consumes (`type`, `data`,
//! `options`). Tooltip text is computed up front, one entry per data point,
//! instead of being left to rendering callbacks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod bmi;
pub mod calories;
pub mod macros;
pub mod progress;
pub mod tooltip;
pub mod water;

pub use bmi::bmi_chart;
pub use calories::calorie_chart;
pub use macros::macro_chart;
pub use progress::progress_chart;
pub use water::water_chart;

/// Dashboard palette
pub mod palette {
    pub const PRIMARY: &str = "#64b5f6";
    pub const PRIMARY_FILL: &str = "rgba(100, 181, 246, 0.1)";
    pub const PRIMARY_FILL_STRONG: &str = "rgba(100, 181, 246, 0.2)";
    pub const GREEN: &str = "#81c784";
    pub const PURPLE: &str = "#9575cd";
    pub const ORANGE: &str = "#ffb74d";
    pub const PROTEIN: &str = "#2286c3";
    pub const FAT: &str = "#519657";
    pub const CARBS: &str = "#fff59d";
    /// Alpha suffix for de-emphasized bars
    pub const FADED_ALPHA: &str = "80";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Doughnut,
    Bar,
}

/// A single color or one color per data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Paint::Single(color.to_string())
    }
}

impl From<Vec<String>> for Paint {
    fn from(colors: Vec<String>) -> Self {
        Paint::PerPoint(colors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

impl Dataset {
    /// Filled, smoothed line in the primary color
    pub fn area_line(label: &str, data: Vec<f64>, fill: &str, point_radius: u32) -> Self {
        Self {
            label: Some(label.to_string()),
            data,
            border_color: Some(palette::PRIMARY.into()),
            background_color: Some(fill.into()),
            point_background_color: Some(palette::PRIMARY.into()),
            point_radius: Some(point_radius),
            point_hover_radius: Some(point_radius + 2),
            tension: Some(0.3),
            fill: Some(true),
            border_width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

impl Legend {
    pub fn hidden() -> Self {
        Self {
            display: Some(false),
            position: None,
        }
    }

    pub fn at(position: LegendPosition) -> Self {
        Self {
            display: None,
            position: Some(position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    pub content: String,
    pub enabled: bool,
}

/// Horizontal reference line drawn by the annotation plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnnotation {
    #[serde(rename = "type")]
    pub kind: String,
    pub y_min: f64,
    pub y_max: f64,
    pub border_color: String,
    pub border_width: u32,
    pub label: AnnotationLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    pub annotations: BTreeMap<String, LineAnnotation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotations>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(AxisTitle {
                display: true,
                text: text.to_string(),
            }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            plugins: Plugins::default(),
            scales: None,
        }
    }
}

/// Tooltip text for one data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipLines {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_label: Option<String>,
}

impl TooltipLines {
    pub fn label(label: String) -> Self {
        Self {
            label,
            after_label: None,
        }
    }
}

/// A complete chart: kind, labeled data, options and tooltip text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    pub tooltips: Vec<TooltipLines>,
}

impl ChartConfig {
    /// Values of the first dataset
    pub fn values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }
}
