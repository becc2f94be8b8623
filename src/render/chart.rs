//! Chart configuration in the shape charting engines expect.
//!
//! Serializes to the familiar `{type, data: {labels, datasets}, options}`
//! layout so a JS bridge can pass it through untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// One label per axis (radar) or per category.
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub background_color: String,
    pub border_color: String,
    pub point_background_color: String,
    pub point_border_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
    pub show_legend: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    /// Radial scale (radar charts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<RadialScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub step_size: f64,
}

impl ChartConfig {
    /// Values of the first dataset, or an empty slice.
    pub fn values(&self) -> &[f64] {
        self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }
}
