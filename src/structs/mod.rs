pub mod category_option;
pub mod category_progress;
pub mod category_series;
pub mod chart;
pub mod cli;
pub mod colored_cell;
pub mod config;
pub mod daily_completion;
pub mod dashboard_analytics;
pub mod dashboard_snapshot;
pub mod dashboard_view;
pub mod heatmap_data;
pub mod stat_cards;
