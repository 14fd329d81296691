use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HeatmapConfig {
    /// Render cells by date instead of in the order the backend sent them.
    #[serde(default = "ConfigHelper::default_sort_chronologically")]
    pub sort_chronologically: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            sort_chronologically: ConfigHelper::default_sort_chronologically(),
        }
    }
}
