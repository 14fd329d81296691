use serde::{Deserialize, Serialize};
use crate::config::constants::ALL_CATEGORIES;

/// Category filter applied to the dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "mode", content = "category", rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    Single(String),
}

impl CategorySelection {
    /// Whether `category` keeps its palette color under this selection.
    pub fn highlights(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Single(selected) => selected == category,
        }
    }

    /// The value a category dropdown would carry for this state.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Single(category) => category,
        }
    }
}
