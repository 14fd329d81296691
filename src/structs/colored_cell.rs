use serde::{Deserialize, Serialize};
use crate::enums::heatmap_bucket::HeatmapBucket;

/// One rendered heatmap square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredCell {
    pub date: String,
    pub count: i64,
    pub bucket: HeatmapBucket,
    pub color: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapLegend {
    pub less_label: String,
    pub colors: Vec<String>,
    pub more_label: String,
}
