pub mod category_selection;
pub mod commands;
pub mod heatmap_bucket;
pub mod output_format;
pub mod refresh_outcome;
