//! Activity session entity - one timed stretch of a user's activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ActivityWindow, Snowflake};

/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60_000;

/// Activity session entity
///
/// A session without `end_time` is still open. Open sessions never count
/// towards playtime but an open, unarchived, `active` session marks the user
/// as currently in game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySession {
    pub id: String,
    pub group_id: Snowflake,
    pub user_id: Snowflake,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes of the session the client reported as idle
    #[serde(default)]
    pub idle_minutes: i64,
    /// Chat messages sent during the session
    #[serde(default)]
    pub messages: i64,
    pub active: bool,
    #[serde(default)]
    pub archived: bool,
}

impl ActivitySession {
    /// Create a new open, active session starting at `start_time`
    pub fn new(
        id: impl Into<String>,
        group_id: Snowflake,
        user_id: Snowflake,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id,
            user_id,
            start_time,
            end_time: None,
            idle_minutes: 0,
            messages: 0,
            active: true,
            archived: false,
        }
    }

    /// Close the session at `end_time`
    ///
    /// An end before the start is clamped to the start so the
    /// `end_time >= start_time` invariant always holds.
    pub fn end(&mut self, end_time: DateTime<Utc>) {
        self.end_time = Some(end_time.max(self.start_time));
        self.active = false;
    }

    /// Check if the session has not ended yet
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Check if the session marks its user as currently in game
    #[inline]
    pub fn is_live(&self) -> bool {
        self.active && !self.archived
    }

    /// Check if the session counts towards playtime for the given window
    ///
    /// Only ended, unarchived sessions that started inside the window qualify.
    pub fn qualifies_for(&self, window: &ActivityWindow) -> bool {
        !self.archived && !self.is_open() && window.contains(self.start_time)
    }

    /// Reject a record whose end lies before its start
    ///
    /// `end` keeps the invariant for sessions built here; rows coming from a
    /// store or a deserializer are not checked until this is called.
    pub fn ensure_well_formed(&self) -> Result<(), DomainError> {
        match self.end_time {
            Some(end) if end < self.start_time => Err(DomainError::MalformedRecord(format!(
                "session {} ends before it starts",
                self.id
            ))),
            _ => Ok(()),
        }
    }

    /// Raw wall-clock duration in milliseconds, `None` while open
    pub fn duration_ms(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_milliseconds())
    }

    /// Duration in whole seconds (floored), `None` while open
    pub fn duration_secs(&self) -> Option<i64> {
        self.duration_ms().map(|ms| ms.div_euclid(1000))
    }

    /// Duration minus idle time, in milliseconds
    ///
    /// Not clamped: a session with more idle minutes than wall-clock time
    /// contributes a negative value.
    pub fn effective_ms(&self, idle_time_enabled: bool) -> Option<i64> {
        let idle = if idle_time_enabled {
            self.idle_minutes.saturating_mul(MS_PER_MINUTE)
        } else {
            0
        };
        self.duration_ms().map(|ms| ms.saturating_sub(idle))
    }
}
