//! Reset marker entity - starts a new leaderboard period

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Marks the point from which activity is aggregated again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetMarker {
    pub group_id: Snowflake,
    pub reset_at: DateTime<Utc>,
}

impl ResetMarker {
    pub fn new(group_id: Snowflake, reset_at: DateTime<Utc>) -> Self {
        Self { group_id, reset_at }
    }

    /// Pick the marker that governs the current window (latest `reset_at`)
    pub fn latest<'a, I>(markers: I) -> Option<&'a ResetMarker>
    where
        I: IntoIterator<Item = &'a ResetMarker>,
    {
        markers.into_iter().max_by_key(|m| m.reset_at)
    }
}
