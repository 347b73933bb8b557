//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Leaderboard Responses
// ============================================================================

/// Playtime entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryResponse {
    pub id: String,
    pub position: u32,
    /// Playtime in whole seconds, may be negative
    pub total: i64,
    pub in_game: bool,
}

/// Session count entry, positioned by playtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCountResponse {
    pub id: String,
    pub position: u32,
    pub total: i64,
}

/// Wrapper for a top slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopThree<T> {
    pub top_three: Vec<T>,
}

/// Leaderboard response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardResponse {
    pub playtime: TopThree<EntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub you: Option<EntryResponse>,
    pub sessions: TopThree<SessionCountResponse>,
}

// ============================================================================
// Activity Responses
// ============================================================================

/// Single activity session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub active: bool,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Whole seconds, only for ended sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    pub messages: i64,
}

/// Recent activity feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityFeedResponse {
    pub sessions: Vec<SessionResponse>,
    pub total: usize,
}

impl ActivityFeedResponse {
    pub fn new(sessions: Vec<SessionResponse>) -> Self {
        Self {
            total: sessions.len(),
            sessions,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Workspace role of a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}

/// Group member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub username: String,
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleResponse>,
}

/// Member directory
#[derive(Debug, Clone, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
    pub total: usize,
}

impl MemberListResponse {
    pub fn new(members: Vec<MemberResponse>) -> Self {
        Self {
            total: members.len(),
            members,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok(version: &'static str) -> Self {
        Self {
            status: "ok",
            version,
        }
    }
}
