use std::fmt::Write;
use crate::helpers::terminal_color::TerminalColor;
use crate::structs::chart::bar_chart_config::BarChartConfig;
use crate::structs::chart::line_chart_config::LineChartConfig;
use crate::structs::colored_cell::{ColoredCell, HeatmapLegend};
use crate::structs::dashboard_view::DashboardView;
use crate::structs::stat_cards::StatCards;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: f64 = 40.0;
const HEATMAP_ROWS: usize = 7;

/// Plain-text rendering of the dashboard for the terminal.
pub struct DashboardLogger;

impl DashboardLogger {
    pub fn print_view(view: &DashboardView) {
        println!("{}", Self::render_view(view));
    }

    pub fn print_heatmap(cells: &[ColoredCell], legend: &HeatmapLegend) {
        println!("{}", Self::render_heatmap(cells, legend));
    }

    pub fn render_view(view: &DashboardView) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n🏆 Habit Hero Dashboard");
        let _ = writeln!(out, "{RULE}");
        let filter = view
            .options
            .iter()
            .find(|o| o.value == view.selection.value())
            .map_or_else(|| view.selection.value().to_string(), |o| o.label.clone());
        let _ = writeln!(out, "🔎 Filter: {filter}");
        out.push_str(&Self::render_stats(&view.stats));
        out.push_str(&Self::render_line(&view.charts.line));
        out.push_str(&Self::render_bar(&view.charts.bar));
        out.push_str(&Self::render_heatmap(&view.heatmap, &view.legend));

        out
    }

    pub fn render_stats(stats: &StatCards) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n📊 Success Rate:   {}", stats.success_rate_label());
        let _ = writeln!(out, "🔥 Longest Streak: {}", stats.streak_label());
        out
    }

    pub fn render_line(line: &LineChartConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n📈 Daily completions by category");
        let _ = writeln!(out, "{RULE}");

        match (line.labels.first(), line.labels.last()) {
            (Some(first), Some(last)) => {
                let _ = writeln!(out, "   {} → {} ({} days)", first, last, line.labels.len());
            }
            _ => {
                let _ = writeln!(out, "   No completion trend available");
                return out;
            }
        }

        let width = line.datasets.iter().map(|d| d.label.len()).max().unwrap_or(0);
        for dataset in &line.datasets {
            let values: Vec<String> = dataset.data.iter().map(ToString::to_string).collect();
            let total: i64 = dataset.data.iter().sum();
            let label = format!("{:<width$}", dataset.label);
            let _ = writeln!(
                out,
                "   {} {} | {} (Σ {})",
                TerminalColor::block(&dataset.border_color),
                TerminalColor::foreground(&dataset.border_color, &label),
                values.join(" "),
                total
            );
        }

        out
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_bar(bar: &BarChartConfig) -> String {
        let mut out = String::new();
        let Some(dataset) = bar.datasets.first() else {
            return out;
        };

        let _ = writeln!(out, "\n📊 {}", dataset.label);
        let _ = writeln!(out, "{RULE}");

        let width = bar.labels.iter().map(String::len).max().unwrap_or(0);
        for (index, label) in bar.labels.iter().enumerate() {
            let rate = dataset.data.get(index).copied().unwrap_or_default();
            let color = dataset.background_color.get(index).map_or("", String::as_str);
            let length = (rate.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize;
            let _ = writeln!(
                out,
                "   {:<width$} {} {:.1}%",
                label,
                TerminalColor::foreground(color, &"█".repeat(length)),
                rate
            );
        }

        out
    }

    /// Seven rows, filled column by column, like a contribution calendar.
    pub fn render_heatmap(cells: &[ColoredCell], legend: &HeatmapLegend) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n🔥 Activity Heatmap");
        let _ = writeln!(out, "{RULE}");

        if cells.is_empty() {
            let _ = writeln!(out, "   No activity recorded");
        } else {
            let columns = cells.len().div_ceil(HEATMAP_ROWS);
            for row in 0..HEATMAP_ROWS {
                let mut line = String::from("   ");
                for column in 0..columns {
                    match cells.get(column * HEATMAP_ROWS + row) {
                        Some(cell) => line.push_str(&TerminalColor::block(&cell.color)),
                        None => line.push(' '),
                    }
                    line.push(' ');
                }
                let _ = writeln!(out, "{}", line.trim_end());
            }
        }

        let swatches: Vec<String> = legend.colors.iter().map(|c| TerminalColor::block(c)).collect();
        let _ = writeln!(out, "   {} {} {}", legend.less_label, swatches.join(" "), legend.more_label);

        out
    }
}
