use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend_position: String,
    pub tooltip_mode: String,
    pub tooltip_intersect: bool,
    pub x_grid: bool,
    pub y_begin_at_zero: bool,
    pub y_tick_suffix: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend_position: "top".to_string(),
            tooltip_mode: "index".to_string(),
            tooltip_intersect: false,
            x_grid: false,
            y_begin_at_zero: true,
            y_tick_suffix: "%".to_string(),
        }
    }
}
