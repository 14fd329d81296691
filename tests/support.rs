use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use tokio::sync::oneshot;
use habit_dashboard::errors::{DashboardError, DashboardResult};
use habit_dashboard::structs::category_progress::CategoryProgress;
use habit_dashboard::structs::daily_completion::DailyCompletion;
use habit_dashboard::structs::dashboard_analytics::DashboardAnalytics;
use habit_dashboard::structs::heatmap_data::HeatmapData;
use habit_dashboard::traits::analytics_source::AnalyticsSource;

pub fn analytics(trend: &[(&str, i64)], progress: &[(&str, f64)]) -> DashboardAnalytics {
    DashboardAnalytics {
        completion_trend: trend.iter().map(|(d, c)| DailyCompletion::new(d, *c)).collect(),
        category_progress: progress.iter().map(|(c, r)| ((*c).to_string(), *r)).collect(),
        overall_success_rate: 62.5,
        longest_streak: 5,
    }
}

pub fn sample_analytics() -> DashboardAnalytics {
    analytics(
        &[("2024-01-01", 10), ("2024-01-02", 4)],
        &[("health", 50.0), ("fitness", 25.0)],
    )
}

pub fn progress(entries: &[(&str, f64)]) -> CategoryProgress {
    entries.iter().map(|(c, r)| ((*c).to_string(), *r)).collect()
}

pub fn unreachable_backend() -> DashboardError {
    DashboardError::network_error("fetch", Some("http://127.0.0.1:8000"), None, "connection refused")
}

/// Serves queued responses in order.
#[derive(Default)]
pub struct FakeSource {
    dashboard: Mutex<VecDeque<DashboardResult<DashboardAnalytics>>>,
    heatmap: Mutex<VecDeque<DashboardResult<HeatmapData>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard(self, response: DashboardResult<DashboardAnalytics>) -> Self {
        self.dashboard.lock().unwrap().push_back(response);
        self
    }

    pub fn heatmap(self, response: DashboardResult<HeatmapData>) -> Self {
        self.heatmap.lock().unwrap().push_back(response);
        self
    }
}

#[async_trait]
impl AnalyticsSource for FakeSource {
    async fn fetch_dashboard(&self) -> DashboardResult<DashboardAnalytics> {
        self.dashboard.lock().unwrap().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }

    async fn fetch_heatmap(&self) -> DashboardResult<HeatmapData> {
        self.heatmap.lock().unwrap().pop_front().unwrap_or_else(|| Ok(HeatmapData::new()))
    }
}

/// Each dashboard call waits on its own gate before answering.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<VecDeque<(oneshot::Receiver<()>, DashboardAnalytics)>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self, analytics: DashboardAnalytics) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back((rx, analytics));
        tx
    }
}

#[async_trait]
impl AnalyticsSource for GatedSource {
    async fn fetch_dashboard(&self) -> DashboardResult<DashboardAnalytics> {
        let next = self.gates.lock().unwrap().pop_front();
        let (gate, analytics) = next.ok_or_else(unreachable_backend)?;
        gate.await
            .map_err(|_| DashboardError::system_error("gate", "sender dropped"))?;
        Ok(analytics)
    }

    async fn fetch_heatmap(&self) -> DashboardResult<HeatmapData> {
        Ok(HeatmapData::new())
    }
}
