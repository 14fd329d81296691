use serde::{Deserialize, Serialize};

/// What happened to a completed refresh when it tried to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshOutcome {
    /// The snapshot was replaced.
    Applied { token: u64 },
    /// A newer refresh was issued while this one was in flight.
    Stale { token: u64, latest: u64 },
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Token of the refresh this outcome belongs to.
    pub fn token(&self) -> u64 {
        match self {
            Self::Applied { token } | Self::Stale { token, .. } => *token,
        }
    }
}
