use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_DASHBOARD_PATH: &str = "/analytics/dashboard";
pub const DEFAULT_HEATMAP_PATH: &str = "/analytics/heatmap";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const API_BASE_URL_ENV: &str = "HABIT_API_BASE_URL";
pub const CONFIG_DIR_NAME: &str = "habit-dashboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Category colors, assigned by canonical position modulo length.
pub const CATEGORY_PALETTE: &[&str] = &["#36A2EB", "#FF6384", "#4BC0C0", "#9966FF", "#FFCE56", "#FF9F40"];
pub const DIMMED_BAR_COLOR: &str = "#e5e7eb";
pub const LINE_FILL_ALPHA_ALL: &str = "33";
pub const LINE_FILL_ALPHA_SINGLE: &str = "44";
pub const LINE_TENSION: f64 = 0.35;
pub const BAR_BORDER_RADIUS: u32 = 10;
pub const BAR_DATASET_LABEL: &str = "Success Rate (%)";

/// GitHub-style activity scale, lightest first.
pub const HEATMAP_COLORS: [&str; 5] = ["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"];
pub const HEATMAP_LEGEND_LESS: &str = "Less";
pub const HEATMAP_LEGEND_MORE: &str = "More";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn interval_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
