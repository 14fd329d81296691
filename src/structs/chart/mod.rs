pub mod bar_chart_config;
pub mod chart_options;
pub mod dashboard_charts;
pub mod line_chart_config;
