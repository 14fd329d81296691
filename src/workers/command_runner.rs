use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::interval_duration;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::enums::refresh_outcome::RefreshOutcome;
use crate::errors::{DashboardError, DashboardResult, ErrorHandler};
use crate::logger::dashboard_logger::DashboardLogger;
use crate::logger::fetch_spinner::FetchSpinner;
use crate::services::heatmap_colorizer::HeatmapColorizer;
use crate::services::http_analytics_source::HttpAnalyticsSource;
use crate::services::refresh_coordinator::RefreshCoordinator;
use crate::structs::config::config::Config;
use crate::structs::dashboard_view::DashboardView;
use crate::traits::analytics_source::AnalyticsSource;

pub struct CommandRunner {
    config: Config,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashboardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Show { category, format } => self.show_command(category, format).await,
            Commands::Heatmap { format } => self.heatmap_command(format).await,
            Commands::Watch { interval, category } => self.watch_command(interval, category).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DashboardResult<()> {
        log::info!("🚀 Initializing habit-dashboard configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to point at your habit backend.", path.display());
        log::info!("🔧 Run 'habit-dashboard validate' to check your configuration.");

        Ok(())
    }

    fn validate_command(&self) -> DashboardResult<()> {
        log::info!("🔍 Validating configuration...");

        // Problems are reported once, by the error handler in `main`.
        ConfigManager::ensure_valid(&self.config)?;

        log::info!("✅ Configuration is valid");
        log::info!("   Dashboard: {}", self.config.api.dashboard_url());
        log::info!("   Heatmap:   {}", self.config.api.heatmap_url());
        Ok(())
    }

    async fn show_command(&self, category: Option<String>, format: Option<OutputFormat>) -> DashboardResult<()> {
        ConfigManager::ensure_valid(&self.config)?;
        let coordinator = self.coordinator()?;

        let mut spinner = FetchSpinner::new("Loading dashboard");
        spinner.start();
        match coordinator.refresh().await {
            Ok(outcome) => spinner.finish(&format!("Dashboard loaded (refresh {})", outcome.token())).await,
            Err(e) => {
                spinner.fail("Failed to load dashboard").await;
                return Err(e);
            }
        }

        if let Some(category) = category {
            Self::apply_category(&coordinator, &category)?;
        }

        let view = coordinator
            .view()
            .ok_or_else(|| DashboardError::system_error("render dashboard", "no snapshot was published"))?;

        Self::emit_view(&view, format.unwrap_or(self.config.output.format))
    }

    async fn heatmap_command(&self, format: Option<OutputFormat>) -> DashboardResult<()> {
        ConfigManager::ensure_valid(&self.config)?;
        let source = HttpAnalyticsSource::new(&self.config.api)?;

        let data = source
            .fetch_heatmap()
            .await
            .map_err(|e| DashboardError::load_failed("heatmap", &e))?;
        let cells = HeatmapColorizer::colorize(&data, self.config.heatmap.sort_chronologically);
        log::debug!("Colored {} heatmap cells", cells.len());

        match format.unwrap_or(self.config.output.format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cells)?),
            OutputFormat::Text => DashboardLogger::print_heatmap(&cells, &HeatmapColorizer::legend()),
        }

        Ok(())
    }

    async fn watch_command(&self, interval: Option<u64>, category: Option<String>) -> DashboardResult<()> {
        ConfigManager::ensure_valid(&self.config)?;

        let seconds = interval.unwrap_or(self.config.watch.interval_secs);
        if seconds == 0 {
            return Err(DashboardError::user_input_error(
                "0",
                "a positive number of seconds",
                "Pass --interval 30 or set watch.interval_secs",
            ));
        }

        let coordinator = Arc::new(self.coordinator()?);
        let category = Arc::new(category.map(|c| c.trim().to_lowercase()));
        let category_applied = Arc::new(AtomicBool::new(false));
        let format = self.config.output.format;

        log::info!("👀 Refreshing every {}s, press Ctrl-C to stop", seconds);
        let mut ticker = tokio::time::interval(interval_duration(seconds));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Refreshes are not serialized; the coordinator drops
                    // whichever result is no longer the latest.
                    let coordinator = Arc::clone(&coordinator);
                    let category = Arc::clone(&category);
                    let category_applied = Arc::clone(&category_applied);
                    tokio::spawn(async move {
                        match coordinator.refresh().await {
                            Ok(RefreshOutcome::Applied { token }) => {
                                log::info!("🔄 Refresh {} applied", token);
                                if let Some(name) = category.as_deref() {
                                    if !category_applied.swap(true, Ordering::SeqCst)
                                        && !coordinator.select_category(name)
                                    {
                                        log::warn!("⚠️ Unknown category '{}', showing all categories", name);
                                    }
                                }
                                if let Some(view) = coordinator.view() {
                                    if let Err(e) = Self::emit_view(&view, format) {
                                        ErrorHandler::handle_error(&e);
                                    }
                                }
                            }
                            Ok(RefreshOutcome::Stale { token, latest }) => {
                                log::debug!("Refresh {} superseded by {}", token, latest);
                            }
                            Err(e) => ErrorHandler::handle_error(&e),
                        }
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    log::info!("👋 Stopping watch");
                    break;
                }
            }
        }

        Ok(())
    }

    fn coordinator(&self) -> DashboardResult<RefreshCoordinator<HttpAnalyticsSource>> {
        let source = HttpAnalyticsSource::new(&self.config.api)?;
        log::debug!("Using analytics backend at {}", self.config.api.base_url);
        Ok(RefreshCoordinator::new(Arc::new(source), self.config.heatmap.sort_chronologically))
    }

    fn apply_category<S: AnalyticsSource>(coordinator: &RefreshCoordinator<S>, category: &str) -> DashboardResult<()> {
        let name = category.trim().to_lowercase();
        if coordinator.select_category(&name) {
            return Ok(());
        }

        let available = coordinator
            .snapshot()
            .map(|s| s.analytics.category_progress.categories().join(", "))
            .unwrap_or_default();
        Err(DashboardError::user_input_error(
            category,
            "'all' or one of the dashboard categories",
            &format!("Available categories: {available}"),
        ))
    }

    fn emit_view(view: &DashboardView, format: OutputFormat) -> DashboardResult<()> {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
            OutputFormat::Text => DashboardLogger::print_view(view),
        }
        Ok(())
    }
}
