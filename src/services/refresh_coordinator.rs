use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use chrono::Utc;
use crate::enums::category_selection::CategorySelection;
use crate::enums::refresh_outcome::RefreshOutcome;
use crate::errors::{DashboardError, DashboardResult};
use crate::services::category_selector::CategorySelector;
use crate::services::chart_dataset_builder::ChartDatasetBuilder;
use crate::services::heatmap_colorizer::HeatmapColorizer;
use crate::services::series_synthesizer::SeriesSynthesizer;
use crate::structs::dashboard_analytics::DashboardAnalytics;
use crate::structs::dashboard_snapshot::DashboardSnapshot;
use crate::structs::dashboard_view::DashboardView;
use crate::structs::heatmap_data::HeatmapData;
use crate::traits::analytics_source::AnalyticsSource;

/// Raw payloads gathered by one refresh.
#[derive(Debug, Clone, Default)]
pub struct FetchedPayload {
    pub analytics: DashboardAnalytics,
    /// `None` when the heatmap request failed on its own.
    pub heatmap: Option<HeatmapData>,
}

#[derive(Default)]
struct DashboardState {
    snapshot: Option<Arc<DashboardSnapshot>>,
    selector: CategorySelector,
}

/// Owns the published dashboard snapshot and the category filter.
///
/// Every refresh takes a token from a monotonically increasing counter.
/// A finished refresh only publishes if its token is still the latest one
/// issued, so a slow response can never overwrite a newer one.
pub struct RefreshCoordinator<S: AnalyticsSource> {
    source: Arc<S>,
    latest_token: AtomicU64,
    state: RwLock<DashboardState>,
    builder: ChartDatasetBuilder,
    sort_heatmap: bool,
}

impl<S: AnalyticsSource> RefreshCoordinator<S> {
    pub fn new(source: Arc<S>, sort_heatmap: bool) -> Self {
        Self {
            source,
            latest_token: AtomicU64::new(0),
            state: RwLock::new(DashboardState::default()),
            builder: ChartDatasetBuilder::new(),
            sort_heatmap,
        }
    }

    /// Issues the token for a new refresh. Any refresh still in flight
    /// becomes stale.
    pub fn begin_refresh(&self) -> u64 {
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token.load(Ordering::SeqCst)
    }

    /// Fetches both payloads concurrently. A dashboard failure fails the
    /// refresh; a heatmap failure only leaves `heatmap` unset.
    pub async fn fetch(&self) -> DashboardResult<FetchedPayload> {
        let (analytics, heatmap) = futures::join!(self.source.fetch_dashboard(), self.source.fetch_heatmap());

        let analytics = analytics.map_err(|e| DashboardError::load_failed("dashboard analytics", &e))?;
        let heatmap = match heatmap {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("⚠️ Heatmap load failed: {}", e);
                None
            }
        };

        Ok(FetchedPayload { analytics, heatmap })
    }

    /// Publishes `payload` if `token` is still the latest issued. Without a
    /// fresh heatmap the published one is carried over.
    pub fn commit(&self, token: u64, payload: FetchedPayload) -> RefreshOutcome {
        let mut snapshot = Self::derive_snapshot(token, payload, self.sort_heatmap);

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let latest = self.latest_token();
        if token != latest {
            log::debug!("Discarding stale refresh {} (latest is {})", token, latest);
            return RefreshOutcome::Stale { token, latest };
        }

        if !snapshot.heatmap_loaded {
            if let Some(previous) = state.snapshot.as_ref().filter(|p| p.heatmap_loaded) {
                log::debug!("Keeping heatmap from snapshot {}", previous.token);
                snapshot.heatmap = previous.heatmap.clone();
                snapshot.heatmap_loaded = true;
            }
        }

        state.selector.reconcile(&snapshot.analytics.category_progress);
        state.snapshot = Some(Arc::new(snapshot));
        log::debug!("Published dashboard snapshot {}", token);

        RefreshOutcome::Applied { token }
    }

    pub async fn refresh(&self) -> DashboardResult<RefreshOutcome> {
        let token = self.begin_refresh();
        log::debug!("🔄 Refresh {} started", token);

        match self.fetch().await {
            Ok(payload) => Ok(self.commit(token, payload)),
            Err(e) => {
                log::error!("❌ Refresh {} failed: {}", token, e);
                Err(e)
            }
        }
    }

    /// Recomputes every derived structure from the raw payloads.
    pub fn derive_snapshot(token: u64, payload: FetchedPayload, sort_heatmap: bool) -> DashboardSnapshot {
        let series =
            SeriesSynthesizer::synthesize(&payload.analytics.completion_trend, &payload.analytics.category_progress);
        let heatmap_loaded = payload.heatmap.is_some();
        let heatmap = payload
            .heatmap
            .map(|data| HeatmapColorizer::colorize(&data, sort_heatmap))
            .unwrap_or_default();

        DashboardSnapshot {
            token,
            fetched_at: Utc::now(),
            analytics: payload.analytics,
            series,
            heatmap,
            heatmap_loaded,
        }
    }

    pub fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).snapshot.clone()
    }

    pub fn selection(&self) -> CategorySelection {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .selector
            .selection()
            .clone()
    }

    /// Changes the category filter against the published categories.
    /// Before the first snapshot only `"all"` is accepted.
    pub fn select_category(&self, name: &str) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let progress = state
            .snapshot
            .as_ref()
            .map(|s| s.analytics.category_progress.clone())
            .unwrap_or_default();
        state.selector.select(name, &progress)
    }

    /// Chart-ready view of the published snapshot under the current filter.
    pub fn view(&self) -> Option<DashboardView> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let snapshot = state.snapshot.as_ref()?;
        let selection = state.selector.selection().clone();
        let progress = &snapshot.analytics.category_progress;

        Some(DashboardView {
            options: CategorySelector::options(progress),
            stats: snapshot.stats(),
            charts: self
                .builder
                .build(&snapshot.trend_dates(), &snapshot.series, progress, &selection),
            heatmap: snapshot.heatmap.clone(),
            legend: HeatmapColorizer::legend(),
            selection,
        })
    }
}
