//! Test fixtures and data generators
//!
//! `MemoryStore` implements every repository trait over shared in-memory
//! collections. Individual operations can be switched to fail to exercise
//! the error paths.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use activity_core::{
    ActivityAdjustment, ActivitySession, ActivityWindow, AdjustmentRepository, DomainError,
    GroupConfig, GroupConfigRepository, GroupMember, MemberRepository, RepoResult, ResetMarker,
    ResetRepository, SessionQuery, SessionRepository, Snowflake,
};
use activity_service::{ranking, ServiceContext};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

/// Counter for unique record ids
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    LatestReset,
    Config,
    EndedSessions,
    ActiveUsers,
    SessionCounts,
    RecentSessions,
    Adjustments,
    Members,
}

#[derive(Debug, Default)]
struct Inner {
    resets: Vec<ResetMarker>,
    configs: HashMap<Snowflake, GroupConfig>,
    sessions: Vec<ActivitySession>,
    adjustments: Vec<ActivityAdjustment>,
    members: Vec<GroupMember>,
    failing: HashSet<StoreOp>,
}

/// In-memory implementation of all repository traits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
    reads: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a `ServiceContext` reading from this store
    pub fn context(&self) -> ServiceContext {
        let store = Arc::new(self.clone());
        ServiceContext::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    /// Number of store reads served so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Make `op` fail with `StoreUnavailable` from now on
    pub async fn fail(&self, op: StoreOp) {
        self.inner.write().await.failing.insert(op);
    }

    pub async fn add_reset(&self, group_id: Snowflake, reset_at: DateTime<Utc>) {
        self.inner.write().await.resets.push(ResetMarker::new(group_id, reset_at));
    }

    pub async fn set_config(&self, group_id: Snowflake, config: GroupConfig) {
        self.inner.write().await.configs.insert(group_id, config);
    }

    pub async fn add_session(&self, session: ActivitySession) {
        self.inner.write().await.sessions.push(session);
    }

    pub async fn add_adjustment(&self, adjustment: ActivityAdjustment) {
        self.inner.write().await.adjustments.push(adjustment);
    }

    pub async fn add_member(&self, member: GroupMember) {
        self.inner.write().await.members.push(member);
    }

    async fn read(&self, op: StoreOp) -> RepoResult<tokio::sync::RwLockReadGuard<'_, Inner>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.read().await;
        if inner.failing.contains(&op) {
            return Err(DomainError::StoreUnavailable(format!("{op:?} is switched off")));
        }
        Ok(inner)
    }
}

#[async_trait]
impl ResetRepository for MemoryStore {
    async fn find_latest(&self, group_id: Snowflake) -> RepoResult<Option<ResetMarker>> {
        let inner = self.read(StoreOp::LatestReset).await?;
        let group_resets = inner.resets.iter().filter(|r| r.group_id == group_id);
        Ok(ResetMarker::latest(group_resets).cloned())
    }
}

#[async_trait]
impl GroupConfigRepository for MemoryStore {
    async fn get_config(&self, group_id: Snowflake) -> RepoResult<GroupConfig> {
        let inner = self.read(StoreOp::Config).await?;
        Ok(inner.configs.get(&group_id).copied().unwrap_or_default())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn find_ended_in_window(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
    ) -> RepoResult<Vec<ActivitySession>> {
        let inner = self.read(StoreOp::EndedSessions).await?;
        Ok(inner
            .sessions
            .iter()
            .filter(|s| s.group_id == group_id && s.qualifies_for(window))
            .cloned()
            .collect())
    }

    async fn find_active_user_ids(&self, group_id: Snowflake) -> RepoResult<HashSet<Snowflake>> {
        let inner = self.read(StoreOp::ActiveUsers).await?;
        Ok(inner
            .sessions
            .iter()
            .filter(|s| s.group_id == group_id && s.is_live())
            .map(|s| s.user_id)
            .collect())
    }

    async fn count_for_users(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
        user_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, i64>> {
        let inner = self.read(StoreOp::SessionCounts).await?;
        let group_sessions: Vec<ActivitySession> = inner
            .sessions
            .iter()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect();
        Ok(ranking::count_sessions(&group_sessions, window, user_ids))
    }

    async fn find_recent(
        &self,
        group_id: Snowflake,
        query: &SessionQuery,
    ) -> RepoResult<Vec<ActivitySession>> {
        let inner = self.read(StoreOp::RecentSessions).await?;
        let mut sessions: Vec<ActivitySession> = inner
            .sessions
            .iter()
            .filter(|s| s.group_id == group_id && !s.archived)
            .filter(|s| query.user_id.is_none_or(|u| s.user_id == u))
            .filter(|s| query.started_after.is_none_or(|t| s.start_time >= t))
            .filter(|s| query.started_before.is_none_or(|t| s.start_time <= t))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        sessions.truncate(usize::try_from(query.limit).unwrap_or(0));
        Ok(sessions)
    }
}

#[async_trait]
impl AdjustmentRepository for MemoryStore {
    async fn find_in_window(
        &self,
        group_id: Snowflake,
        window: &ActivityWindow,
    ) -> RepoResult<Vec<ActivityAdjustment>> {
        let inner = self.read(StoreOp::Adjustments).await?;
        Ok(inner
            .adjustments
            .iter()
            .filter(|a| a.group_id == group_id && a.qualifies_for(window))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_group(
        &self,
        group_id: Snowflake,
        with_rank: bool,
    ) -> RepoResult<Vec<GroupMember>> {
        let inner = self.read(StoreOp::Members).await?;
        Ok(inner
            .members
            .iter()
            .filter(|m| m.group_id == group_id)
            .map(|m| {
                let mut member = m.clone();
                if !with_rank {
                    member.rank = None;
                    member.role = None;
                }
                member
            })
            .collect())
    }
}

// ============================================================================
// Record builders
// ============================================================================

/// Ended session of `minutes` length starting `ago` before now
pub fn ended_session(
    group_id: Snowflake,
    user_id: i64,
    ago: Duration,
    minutes: i64,
) -> ActivitySession {
    let start = Utc::now() - ago;
    let mut session = ActivitySession::new(
        format!("session-{}", unique_suffix()),
        group_id,
        Snowflake::new(user_id),
        start,
    );
    session.end(start + Duration::minutes(minutes));
    session
}

/// Session that is still running, started `ago` before now
pub fn live_session(group_id: Snowflake, user_id: i64, ago: Duration) -> ActivitySession {
    ActivitySession::new(
        format!("session-{}", unique_suffix()),
        group_id,
        Snowflake::new(user_id),
        Utc::now() - ago,
    )
}

/// Manual adjustment created `ago` before now
pub fn adjustment(
    group_id: Snowflake,
    user_id: i64,
    minutes: i64,
    ago: Duration,
) -> ActivityAdjustment {
    let mut adjustment = ActivityAdjustment::new(
        format!("adjustment-{}", unique_suffix()),
        group_id,
        Snowflake::new(user_id),
        minutes,
    );
    adjustment.created_at = Utc::now() - ago;
    adjustment
}

/// Member named after its id
pub fn member(group_id: Snowflake, user_id: i64) -> GroupMember {
    GroupMember::new(group_id, Snowflake::new(user_id), format!("user{user_id}"))
}
