use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<i64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

/// Daily per-category completions, one point per trend date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}
