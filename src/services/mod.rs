pub mod category_selector;
pub mod chart_dataset_builder;
pub mod heatmap_colorizer;
pub mod http_analytics_source;
pub mod refresh_coordinator;
pub mod series_synthesizer;
