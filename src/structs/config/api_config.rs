use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_dashboard_path")]
    pub dashboard_path: String,

    #[serde(default = "ConfigHelper::default_heatmap_path")]
    pub heatmap_path: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn dashboard_url(&self) -> String {
        Self::join(&self.base_url, &self.dashboard_path)
    }

    pub fn heatmap_url(&self) -> String {
        Self::join(&self.base_url, &self.heatmap_path)
    }

    fn join(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            dashboard_path: ConfigHelper::default_dashboard_path(),
            heatmap_path: ConfigHelper::default_heatmap_path(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
