use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_format")]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_log_level")]
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ConfigHelper::default_format(),
            log_level: ConfigHelper::default_log_level(),
        }
    }
}
