use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DASHBOARD_PATH, DEFAULT_HEATMAP_PATH, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WATCH_INTERVAL_SECS,
};
use crate::enums::output_format::OutputFormat;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_dashboard_path() -> String {
        DEFAULT_DASHBOARD_PATH.to_string()
    }

    pub fn default_heatmap_path() -> String {
        DEFAULT_HEATMAP_PATH.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_sort_chronologically() -> bool {
        false
    }

    pub fn default_format() -> OutputFormat {
        OutputFormat::Text
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }

    pub fn default_interval_secs() -> u64 {
        DEFAULT_WATCH_INTERVAL_SECS
    }
}
