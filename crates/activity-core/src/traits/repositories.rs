//! Repository traits (ports) - define the interface for data access
//!
//! The leaderboard only reads. Storage engines implement these traits and are
//! handed to the service layer as trait objects.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ActivityAdjustment, ActivitySession, GroupConfig, GroupMember, ResetMarker};
use crate::error::DomainError;
use crate::value_objects::{ActivityWindow, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reset Repository
// ============================================================================

#[async_trait]
pub trait ResetRepository: Send + Sync {
    /// Find the most recent reset marker of a group
    async fn find_latest(&self, group_id: Snowflake) -> RepoResult<Option<ResetMarker>>;
}

// ============================================================================
// Group Config Repository
// ============================================================================

#[async_trait]
pub trait GroupConfigRepository: Send + Sync {
    /// Load the activity settings of a group (defaults when none are stored)
    async fn get_config(&self, group_id: Snowflake) -> RepoResult<GroupConfig>;
}

// ============================================================================
// Session Repository
// ============================================================================

/// Filters for listing recent sessions
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    pub user_id: Option<Snowflake>,
    /// Inclusive lower bound on start time
    pub started_after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on start time
    pub started_before: Option<DateTime<Utc>>,
    pub limit: i64,
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// List ended, unarchived sessions that started inside the window
    async fn find_ended_in_window(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
    ) -> RepoResult<Vec<ActivitySession>>;

    /// Ids of users with at least one unarchived session flagged active
    async fn find_active_user_ids(&self, group_id: Snowflake) -> RepoResult<HashSet<Snowflake>>;

    /// Count ended, unarchived sessions in the window for each of the given users
    async fn count_for_users(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
        user_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, i64>>;

    /// List unarchived sessions, newest start first
    async fn find_recent(
        &self,
        group_id: Snowflake,
        query: &SessionQuery,
    ) -> RepoResult<Vec<ActivitySession>>;
}

// ============================================================================
// Adjustment Repository
// ============================================================================

#[async_trait]
pub trait AdjustmentRepository: Send + Sync {
    /// List unarchived adjustments created inside the window
    async fn find_in_window(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
    ) -> RepoResult<Vec<ActivityAdjustment>>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members of a group
    ///
    /// `with_rank` asks the store to join each member's rank and role;
    /// without it `GroupMember::rank` and `GroupMember::role` may be left empty.
    async fn find_by_group(
        &self,
        group_id: Snowflake,
        with_rank: bool,
    ) -> RepoResult<Vec<GroupMember>>;
}
