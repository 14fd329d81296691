use serde::{Deserialize, Serialize};

/// Total habit completions the backend counted for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    pub date: String,
    pub completions: i64,
}

impl DailyCompletion {
    pub fn new(date: &str, completions: i64) -> Self {
        Self {
            date: date.to_string(),
            completions,
        }
    }
}
