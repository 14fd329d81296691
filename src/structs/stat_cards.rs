use serde::{Deserialize, Serialize};

/// Headline numbers shown above the charts. Both come straight from the
/// backend and are only formatted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCards {
    pub overall_success_rate: f64,
    pub longest_streak: i64,
}

impl StatCards {
    pub fn success_rate_label(&self) -> String {
        format!("{:.1}%", self.overall_success_rate)
    }

    pub fn streak_label(&self) -> String {
        format!("{} 🔥", self.longest_streak)
    }
}
