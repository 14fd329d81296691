use serde::{Deserialize, Serialize};
use crate::config::constants::HEATMAP_COLORS;

/// Activity intensity class for one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapBucket {
    Bucket0,
    Bucket1,
    Bucket2,
    Bucket3,
    Bucket4,
}

impl HeatmapBucket {
    pub const ALL: [HeatmapBucket; 5] = [
        HeatmapBucket::Bucket0,
        HeatmapBucket::Bucket1,
        HeatmapBucket::Bucket2,
        HeatmapBucket::Bucket3,
        HeatmapBucket::Bucket4,
    ];

    /// Thresholds: 0, 1-2, 3-4, 5-6, 7+. Negative counts fail every
    /// upper threshold and land in `Bucket0`.
    pub fn from_count(count: i64) -> Self {
        if count >= 7 {
            HeatmapBucket::Bucket4
        } else if count >= 5 {
            HeatmapBucket::Bucket3
        } else if count >= 3 {
            HeatmapBucket::Bucket2
        } else if count >= 1 {
            HeatmapBucket::Bucket1
        } else {
            HeatmapBucket::Bucket0
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> &'static str {
        HEATMAP_COLORS[self.index()]
    }
}
