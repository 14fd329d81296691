use serde::{Deserialize, Serialize};
use crate::structs::category_progress::CategoryProgress;
use crate::structs::daily_completion::DailyCompletion;

/// Payload of `GET /analytics/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    #[serde(default)]
    pub completion_trend: Vec<DailyCompletion>,

    #[serde(default)]
    pub category_progress: CategoryProgress,

    #[serde(default)]
    pub overall_success_rate: f64,

    #[serde(default)]
    pub longest_streak: i64,
}

impl DashboardAnalytics {
    pub fn trend_dates(&self) -> Vec<String> {
        self.completion_trend.iter().map(|d| d.date.clone()).collect()
    }
}
