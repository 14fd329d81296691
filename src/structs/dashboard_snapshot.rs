use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::structs::category_series::CategorySeries;
use crate::structs::colored_cell::ColoredCell;
use crate::structs::dashboard_analytics::DashboardAnalytics;
use crate::structs::stat_cards::StatCards;

/// Everything derived from one refresh. Never mutated after construction;
/// a newer refresh replaces the whole value.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub token: u64,
    pub fetched_at: DateTime<Utc>,
    pub analytics: DashboardAnalytics,
    pub series: CategorySeries,
    pub heatmap: Vec<ColoredCell>,
    pub heatmap_loaded: bool,
}

impl DashboardSnapshot {
    pub fn stats(&self) -> StatCards {
        StatCards {
            overall_success_rate: self.analytics.overall_success_rate,
            longest_streak: self.analytics.longest_streak,
        }
    }

    pub fn trend_dates(&self) -> Vec<String> {
        self.analytics.trend_dates()
    }
}
