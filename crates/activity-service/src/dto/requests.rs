//! Request DTOs for API endpoints
//!
//! Query-string parameters use the camelCase names the public API exposes.

use activity_common::MAX_RECENT_SESSIONS;
use activity_core::Snowflake;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Leaderboard Requests
// ============================================================================

/// Leaderboard query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    /// User whose own standing is requested
    pub user_id: Option<String>,
}

impl LeaderboardQuery {
    /// The "you" user id
    ///
    /// An id that does not parse can never match a member, so it is treated
    /// as absent rather than rejected.
    pub fn you(&self) -> Option<Snowflake> {
        self.user_id
            .as_deref()
            .and_then(|id| Snowflake::parse(id).ok())
    }
}

// ============================================================================
// Activity Requests
// ============================================================================

/// Recent activity query parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct ActivityQuery {
    #[validate(custom(function = "validate_snowflake"))]
    pub user_id: Option<String>,

    /// Inclusive lower bound on session start time
    pub start_date: Option<DateTime<Utc>>,

    /// Inclusive upper bound on session start time
    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl ActivityQuery {
    /// Parsed user filter
    ///
    /// Only meaningful after `validate()` has passed.
    pub fn user_filter(&self) -> Option<Snowflake> {
        self.user_id
            .as_deref()
            .and_then(|id| Snowflake::parse(id).ok())
    }

    /// Requested limit, falling back to `default` and capped at the maximum
    pub fn effective_limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default).clamp(1, MAX_RECENT_SESSIONS)
    }
}

fn validate_snowflake(id: &str) -> Result<(), ValidationError> {
    match Snowflake::parse(id) {
        Ok(parsed) if !parsed.is_zero() => Ok(()),
        _ => Err(ValidationError::new("invalid_user_id")
            .with_message("Invalid user ID".into())),
    }
}

fn validate_date_range(query: &ActivityQuery) -> Result<(), ValidationError> {
    match (query.start_date, query.end_date) {
        (Some(start), Some(end)) if start > end => {
            Err(ValidationError::new("invalid_date_range")
                .with_message("startDate must not be after endDate".into()))
        }
        _ => Ok(()),
    }
}
