use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_radius: u32,
}

/// Success rate per category; one bar per category whatever the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

impl BarChartConfig {
    /// Color of the bar at `index`, if any.
    pub fn bar_color(&self, index: usize) -> Option<&str> {
        self.datasets
            .first()
            .and_then(|d| d.background_color.get(index))
            .map(String::as_str)
    }
}
