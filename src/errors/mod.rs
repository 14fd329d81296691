use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum DashboardError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Payload decoding errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    // A refresh could not produce a payload
    #[error("Failed to load {source_name}: {reason}")]
    LoadFailed {
        source_name: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },

    // User input errors
    #[error("Invalid input '{input}': expected {expected}")]
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // Multiple errors (for config validation)
    #[error("Multiple errors occurred during {context}")]
    MultipleErrors {
        errors: Vec<DashboardError>,
        context: String,
    },
}

impl DashboardError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(str::to_string),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Collapses any transport or decoding failure into the single
    /// "load failed" condition the dashboard surfaces upstream.
    pub fn load_failed(source_name: &str, cause: &DashboardError) -> Self {
        match cause {
            Self::LoadFailed { .. } => cause.clone(),
            _ => Self::LoadFailed {
                source_name: source_name.to_string(),
                reason: cause.to_string(),
            },
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::LoadFailed { .. }
            | Self::UserInputError { .. }
            | Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } | Self::ParseError { .. } | Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(DashboardError::is_recoverable),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } | Self::LoadFailed { .. } | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } | Self::UserInputError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => errors
                .iter()
                .map(DashboardError::severity)
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and TOML syntax")
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check that the habit backend is running and reachable");
                msg
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {content_type}: {reason}\n💡 The backend returned an unexpected payload shape")
            }
            Self::LoadFailed { source_name, reason } => {
                format!("Failed to load {source_name}: {reason}\n💡 This error is recoverable - the next refresh will retry")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{input}': expected {expected}\n💡 {suggestion}")
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {context}:\n");
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &DashboardError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(error: toml::de::Error) -> Self {
        DashboardError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return DashboardError::ParseError {
                content_type: "JSON".to_string(),
                reason: error.to_string(),
            };
        }

        DashboardError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
