//! Leaderboard entries - derived per computation, never persisted

use serde::Serialize;

use crate::value_objects::Snowflake;

/// Convert milliseconds to whole seconds, rounding toward negative infinity
///
/// `-1500` ms becomes `-2` s, not `-1`.
#[inline]
pub fn floor_seconds(ms: i64) -> i64 {
    ms.div_euclid(1000)
}

/// One user's ranked playtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: Snowflake,
    /// 1-based, dense, unique per leaderboard
    pub position: u32,
    pub total_seconds: i64,
    pub in_game: bool,
}

impl LeaderboardEntry {
    /// Unpositioned entry for a user's accumulated milliseconds
    pub fn from_millis(user_id: Snowflake, total_ms: i64) -> Self {
        Self {
            user_id,
            position: 0,
            total_seconds: floor_seconds(total_ms),
            in_game: false,
        }
    }
}

/// Session count for a top-ranked user, positioned by the playtime ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionCountEntry {
    pub user_id: Snowflake,
    pub position: u32,
    pub total: i64,
}
