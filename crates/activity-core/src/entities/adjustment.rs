//! Activity adjustment entity - a manual, signed correction to a user's time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::MS_PER_MINUTE;
use crate::value_objects::{ActivityWindow, Snowflake};

/// Manual playtime correction in whole minutes (may be negative)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAdjustment {
    pub id: String,
    pub group_id: Snowflake,
    pub user_id: Snowflake,
    pub minutes: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
}

impl ActivityAdjustment {
    /// Create a new adjustment timestamped now
    pub fn new(
        id: impl Into<String>,
        group_id: Snowflake,
        user_id: Snowflake,
        minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            group_id,
            user_id,
            minutes,
            created_at: Utc::now(),
            archived: false,
        }
    }

    /// Signed contribution in milliseconds
    #[inline]
    pub fn delta_ms(&self) -> i64 {
        self.minutes.saturating_mul(MS_PER_MINUTE)
    }

    /// Check if the adjustment counts towards playtime for the given window
    pub fn qualifies_for(&self, window: &ActivityWindow) -> bool {
        !self.archived && window.contains(self.created_at)
    }
}
