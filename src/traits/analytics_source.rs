use async_trait::async_trait;
use crate::errors::DashboardResult;
use crate::structs::dashboard_analytics::DashboardAnalytics;
use crate::structs::heatmap_data::HeatmapData;

/// Backend that serves the two aggregate analytics payloads.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {

    async fn fetch_dashboard(&self) -> DashboardResult<DashboardAnalytics>;

    async fn fetch_heatmap(&self) -> DashboardResult<HeatmapData>;
}
