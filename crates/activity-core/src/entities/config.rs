//! Group activity settings

use serde::{Deserialize, Serialize};

/// Per-group leaderboard settings
///
/// Stored upstream as a JSON document, hence the camelCase field names and the
/// `leaderboardRole` alias for the rank threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    /// Minimum rank needed to appear on the leaderboard
    #[serde(default, alias = "leaderboardRole")]
    pub rank_threshold: Option<i64>,
    /// Deduct reported idle minutes from session durations
    #[serde(default = "default_idle_time_enabled")]
    pub idle_time_enabled: bool,
}

fn default_idle_time_enabled() -> bool {
    true
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            rank_threshold: None,
            idle_time_enabled: default_idle_time_enabled(),
        }
    }
}

impl GroupConfig {
    /// Parse a stored settings document
    ///
    /// Missing keys fall back to defaults. A threshold of zero disables gating.
    pub fn from_document(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_value(value)?;
        Ok(config.normalized())
    }

    /// Effective rank threshold (zero counts as unset)
    #[inline]
    pub fn threshold(&self) -> Option<i64> {
        self.rank_threshold.filter(|&t| t != 0)
    }

    /// Whether members must be loaded together with their rank
    #[inline]
    pub fn needs_rank(&self) -> bool {
        self.threshold().is_some()
    }

    fn normalized(self) -> Self {
        Self {
            rank_threshold: self.threshold(),
            ..self
        }
    }
}
