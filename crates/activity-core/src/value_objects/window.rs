//! Aggregation window - the `[start, end]` period a leaderboard covers

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Inclusive time range used to select sessions and adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ActivityWindow {
    /// Window start used when a group has never been reset (2025-01-01T00:00:00Z)
    pub const DEFAULT_EPOCH_SECS: i64 = 1_735_689_600;

    /// Create a window from explicit bounds
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The default window start
    pub fn default_epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(Self::DEFAULT_EPOCH_SECS, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Window from the most recent reset (or the default epoch) up to `now`
    pub fn since_reset(reset_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        Self {
            start: reset_at.unwrap_or_else(Self::default_epoch),
            end: now,
        }
    }

    /// Check whether a timestamp falls inside the window (both ends inclusive)
    #[inline]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}
