use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{API_BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::config::config::Config;

const KNOWN_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map_or_else(Self::default_config_path, Path::to_path_buf)
    }

    /// Loads the config from `path` (or the default location), falling back
    /// to defaults when the file does not exist. `HABIT_API_BASE_URL`
    /// overrides `api.base_url` either way.
    ///
    /// Nothing is logged here: the log level is itself read from this file.
    /// See [`ConfigManager::report_source`].
    pub fn load(path: Option<&Path>) -> DashboardResult<Config> {
        let config_path = Self::resolve_path(path);

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else if path.is_some() {
            return Err(DashboardError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        } else {
            Config::default()
        };

        if let Some(base_url) = Self::base_url_override() {
            config.api.base_url = base_url;
        }

        Ok(config)
    }

    /// `HABIT_API_BASE_URL`, ignored when unset or blank.
    pub fn base_url_override() -> Option<String> {
        std::env::var(API_BASE_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Logs where a loaded config came from, once the logger is up.
    pub fn report_source(path: Option<&Path>, config: &Config) {
        let config_path = Self::resolve_path(path);
        if config_path.exists() {
            log::info!("📋 Loaded config from: {}", config_path.display());
        } else {
            log::debug!("No config at {}, using defaults", config_path.display());
        }

        if Self::base_url_override().is_some() {
            log::debug!("Using {} from {}", config.api.base_url, API_BASE_URL_ENV);
        }
    }

    pub fn load_from(path: &Path) -> DashboardResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| DashboardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DashboardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn sample_config() -> &'static str {
        r#"# Habit Dashboard Configuration

[api]
# Where the habit backend is running
base_url = "http://127.0.0.1:8000"
dashboard_path = "/analytics/dashboard"
heatmap_path = "/analytics/heatmap"

# Per-request timeout
timeout_secs = 10

[heatmap]
# false renders days in the order the backend sends them
sort_chronologically = false

[output]
# "text" or "json"
format = "text"
log_level = "info"

[watch]
# Seconds between refreshes for `habit-dashboard watch`
interval_secs = 30
"#
    }

    pub fn create_sample_config(path: Option<&Path>) -> DashboardResult<PathBuf> {
        let config_file_path = Self::resolve_path(path);

        if config_file_path.exists() {
            return Err(DashboardError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", config_file_path.display())),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, Self::sample_config())?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());

        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = config.api.base_url.trim();
        if base_url.is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("api.base_url must start with http:// or https://: {base_url}"));
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.watch.interval_secs == 0 {
            errors.push("watch.interval_secs must be greater than zero".to_string());
        }

        if !KNOWN_LOG_LEVELS.contains(&config.output.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "output.log_level '{}' is not one of: {}",
                config.output.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate_config` folded into a single error for `?` callers.
    pub fn ensure_valid(config: &Config) -> DashboardResult<()> {
        Self::validate_config(config).map_err(|errors| DashboardError::MultipleErrors {
            errors: errors
                .iter()
                .map(|e| DashboardError::config_error(e, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })
    }
}
