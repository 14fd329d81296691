use std::cmp::Ordering;
use chrono::NaiveDate;
use crate::config::constants::{HEATMAP_COLORS, HEATMAP_LEGEND_LESS, HEATMAP_LEGEND_MORE};
use crate::enums::heatmap_bucket::HeatmapBucket;
use crate::structs::colored_cell::{ColoredCell, HeatmapLegend};
use crate::structs::heatmap_data::{HeatmapCell, HeatmapData};

pub struct HeatmapColorizer;

impl HeatmapColorizer {
    pub fn bucket(count: i64) -> HeatmapBucket {
        HeatmapBucket::from_count(count)
    }

    pub fn color(count: i64) -> &'static str {
        Self::bucket(count).color()
    }

    /// Colors every cell, keeping the order of `data` unless
    /// `sort_chronologically` is set.
    pub fn colorize(data: &HeatmapData, sort_chronologically: bool) -> Vec<ColoredCell> {
        let mut cells: Vec<&HeatmapCell> = data.cells.iter().collect();
        if sort_chronologically {
            cells.sort_by(|a, b| Self::compare_dates(&a.date, &b.date));
        }

        cells.into_iter().map(Self::colorize_cell).collect()
    }

    pub fn colorize_cell(cell: &HeatmapCell) -> ColoredCell {
        let bucket = Self::bucket(cell.count);
        ColoredCell {
            date: cell.date.clone(),
            count: cell.count,
            bucket,
            color: bucket.color().to_string(),
            tooltip: format!("{} : {} habits completed", cell.date, cell.count),
        }
    }

    pub fn legend() -> HeatmapLegend {
        HeatmapLegend {
            less_label: HEATMAP_LEGEND_LESS.to_string(),
            colors: HEATMAP_COLORS.iter().map(|c| (*c).to_string()).collect(),
            more_label: HEATMAP_LEGEND_MORE.to_string(),
        }
    }

    // Stable: unparseable dates sort after parseable ones and keep their
    // relative order.
    fn compare_dates(a: &str, b: &str) -> Ordering {
        let parse = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok();
        match (parse(a), parse(b)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_bucket_edges() {
        let cases = [
            (0, HeatmapBucket::Bucket0),
            (1, HeatmapBucket::Bucket1),
            (2, HeatmapBucket::Bucket1),
            (3, HeatmapBucket::Bucket2),
            (4, HeatmapBucket::Bucket2),
            (5, HeatmapBucket::Bucket3),
            (6, HeatmapBucket::Bucket3),
            (7, HeatmapBucket::Bucket4),
            (100, HeatmapBucket::Bucket4),
        ];

        for (count, expected) in cases {
            assert_eq!(HeatmapColorizer::bucket(count), expected, "count {count}");
        }
    }

    #[test]
    fn negative_counts_fall_through_to_lightest() {
        assert_eq!(HeatmapColorizer::bucket(-3), HeatmapBucket::Bucket0);
        assert_eq!(HeatmapColorizer::color(-3), "#ebedf0");
    }

    #[test]
    fn tooltip_names_date_and_count() {
        let cell = HeatmapCell {
            date: "2024-03-01".to_string(),
            count: 4,
        };

        let colored = HeatmapColorizer::colorize_cell(&cell);
        assert_eq!(colored.tooltip, "2024-03-01 : 4 habits completed");
        assert_eq!(colored.color, "#7bc96f");
    }

    #[test]
    fn legend_lists_all_five_colors() {
        let legend = HeatmapColorizer::legend();
        assert_eq!(legend.colors.len(), 5);
        assert_eq!(legend.less_label, "Less");
        assert_eq!(legend.more_label, "More");
    }
}
