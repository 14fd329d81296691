mod support;

mod chart_tests;
mod heatmap_tests;
