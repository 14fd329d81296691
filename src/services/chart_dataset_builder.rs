use crate::config::constants::{
    BAR_BORDER_RADIUS, BAR_DATASET_LABEL, CATEGORY_PALETTE, DIMMED_BAR_COLOR, LINE_FILL_ALPHA_ALL,
    LINE_FILL_ALPHA_SINGLE, LINE_TENSION,
};
use crate::enums::category_selection::CategorySelection;
use crate::structs::category_progress::CategoryProgress;
use crate::structs::category_series::CategorySeries;
use crate::structs::chart::bar_chart_config::{BarChartConfig, BarDataset};
use crate::structs::chart::chart_options::ChartOptions;
use crate::structs::chart::dashboard_charts::DashboardCharts;
use crate::structs::chart::line_chart_config::{LineChartConfig, LineDataset};

/// Builds line and bar chart configurations from synthesized series and
/// the current category filter.
///
/// Colors come from the palette by the category's position in the
/// canonical ordering, cycling once the palette runs out. Categories that
/// are `palette.len()` apart therefore share a color.
#[derive(Debug, Clone)]
pub struct ChartDatasetBuilder {
    palette: Vec<String>,
    dimmed_color: String,
}

impl ChartDatasetBuilder {
    pub fn new() -> Self {
        Self {
            palette: CATEGORY_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            dimmed_color: DIMMED_BAR_COLOR.to_string(),
        }
    }

    /// Replaces the palette. An empty palette keeps the default one.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    pub fn palette_color(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }

    /// Palette color of `category`, or of index 0 when it is not in the
    /// canonical ordering.
    pub fn category_color(&self, progress: &CategoryProgress, category: &str) -> &str {
        self.palette_color(progress.position(category).unwrap_or(0))
    }

    pub fn build(
        &self,
        dates: &[String],
        series: &CategorySeries,
        progress: &CategoryProgress,
        selection: &CategorySelection,
    ) -> DashboardCharts {
        DashboardCharts {
            line: self.build_line(dates, series, progress, selection),
            bar: self.build_bar(progress, selection),
            options: ChartOptions::default(),
        }
    }

    pub fn build_line(
        &self,
        dates: &[String],
        series: &CategorySeries,
        progress: &CategoryProgress,
        selection: &CategorySelection,
    ) -> LineChartConfig {
        let datasets = match selection {
            CategorySelection::All => progress
                .categories()
                .iter()
                .enumerate()
                .map(|(index, category)| {
                    self.line_dataset(category, series, self.palette_color(index), LINE_FILL_ALPHA_ALL)
                })
                .collect(),
            CategorySelection::Single(category) => {
                let color = self.category_color(progress, category);
                vec![self.line_dataset(category, series, color, LINE_FILL_ALPHA_SINGLE)]
            }
        };

        LineChartConfig {
            labels: dates.to_vec(),
            datasets,
        }
    }

    pub fn build_bar(&self, progress: &CategoryProgress, selection: &CategorySelection) -> BarChartConfig {
        let mut data = Vec::with_capacity(progress.len());
        let mut colors = Vec::with_capacity(progress.len());

        for (index, (category, rate)) in progress.iter().enumerate() {
            data.push(rate);
            let color = if selection.highlights(category) {
                self.palette_color(index)
            } else {
                self.dimmed_color.as_str()
            };
            colors.push(color.to_string());
        }

        BarChartConfig {
            labels: progress.categories().iter().map(|c| c.to_uppercase()).collect(),
            datasets: vec![BarDataset {
                label: BAR_DATASET_LABEL.to_string(),
                data,
                background_color: colors,
                border_radius: BAR_BORDER_RADIUS,
            }],
        }
    }

    fn line_dataset(&self, category: &str, series: &CategorySeries, color: &str, alpha: &str) -> LineDataset {
        LineDataset {
            label: category.to_uppercase(),
            data: series.get(category).map(<[i64]>::to_vec).unwrap_or_default(),
            border_color: color.to_string(),
            background_color: format!("{color}{alpha}"),
            fill: true,
            tension: LINE_TENSION,
        }
    }
}

impl Default for ChartDatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
