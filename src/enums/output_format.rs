use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[serde(rename = "text")]
    #[default]
    Text,
    #[serde(rename = "json")]
    Json,
}
