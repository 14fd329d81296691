pub mod api_config;
pub mod config;
pub mod heatmap_config;
pub mod output_config;
pub mod watch_config;
