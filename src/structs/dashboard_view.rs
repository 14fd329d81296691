use serde::Serialize;
use crate::enums::category_selection::CategorySelection;
use crate::structs::category_option::CategoryOption;
use crate::structs::chart::dashboard_charts::DashboardCharts;
use crate::structs::colored_cell::{ColoredCell, HeatmapLegend};
use crate::structs::stat_cards::StatCards;

/// Presentation-ready bundle handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selection: CategorySelection,
    pub options: Vec<CategoryOption>,
    pub stats: StatCards,
    pub charts: DashboardCharts,
    pub heatmap: Vec<ColoredCell>,
    pub legend: HeatmapLegend,
}
