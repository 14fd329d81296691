use serde::{Deserialize, Serialize};
use crate::structs::chart::bar_chart_config::BarChartConfig;
use crate::structs::chart::chart_options::ChartOptions;
use crate::structs::chart::line_chart_config::LineChartConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub line: LineChartConfig,
    pub bar: BarChartConfig,
    pub options: ChartOptions,
}
