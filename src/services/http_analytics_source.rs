use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::constants::timeout_duration;
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::dashboard_analytics::DashboardAnalytics;
use crate::structs::heatmap_data::HeatmapData;
use crate::traits::analytics_source::AnalyticsSource;

#[derive(Clone)]
pub struct HttpAnalyticsSource {
    client: Client,
    dashboard_url: String,
    heatmap_url: String,
}

impl HttpAnalyticsSource {
    pub fn new(config: &ApiConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| DashboardError::system_error("build HTTP client", &e.to_string()))?;

        Ok(Self {
            client,
            dashboard_url: config.dashboard_url(),
            heatmap_url: config.heatmap_url(),
        })
    }

    pub fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }

    pub fn heatmap_url(&self) -> &str {
        &self.heatmap_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, operation: &str) -> DashboardResult<T> {
        log::debug!("📡 GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::network_error(
                operation,
                Some(url),
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("unexpected status"),
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DashboardError::parse_error(operation, &e.to_string()))
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn fetch_dashboard(&self) -> DashboardResult<DashboardAnalytics> {
        self.get_json(&self.dashboard_url, "fetch dashboard analytics").await
    }

    async fn fetch_heatmap(&self) -> DashboardResult<HeatmapData> {
        self.get_json(&self.heatmap_url, "fetch heatmap").await
    }
}
