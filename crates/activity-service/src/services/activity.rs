//! Activity service
//!
//! Recent session feed of a group.

use std::collections::HashMap;

use activity_core::{DomainError, SessionQuery, Snowflake};
use tracing::{error, info, instrument};

use crate::dto::{ActivityFeedResponse, ActivityQuery, SessionResponse, SessionWithMember};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List recent unarchived sessions, newest start first
    ///
    /// `query` is expected to have passed validation; `default_limit` applies
    /// when it carries no limit of its own.
    #[instrument(skip(self, query))]
    pub async fn recent_sessions(
        &self,
        group_id: Snowflake,
        query: &ActivityQuery,
        default_limit: u32,
    ) -> ServiceResult<ActivityFeedResponse> {
        if group_id.is_zero() {
            return Err(DomainError::InvalidGroupId.into());
        }

        let limit = query.effective_limit(default_limit) as usize;
        let filter = SessionQuery {
            user_id: query.user_filter(),
            started_after: query.start_date,
            started_before: query.end_date,
            limit: limit as i64,
        };

        let (mut sessions, members) = tokio::try_join!(
            self.ctx.session_repo().find_recent(group_id, &filter),
            self.ctx.member_repo().find_by_group(group_id, false),
        )
        .map_err(|e| {
            error!(group_id = %group_id, error = %e, "Failed to load recent activity");
            e
        })?;

        sessions.retain(|s| !s.archived);
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        sessions.truncate(limit);

        let usernames: HashMap<Snowflake, String> = members
            .into_iter()
            .map(|m| (m.user_id, m.username))
            .collect();

        let sessions: Vec<SessionResponse> = sessions
            .into_iter()
            .map(|session| {
                let username = usernames.get(&session.user_id).cloned();
                SessionResponse::from(SessionWithMember { session, username })
            })
            .collect();

        info!(group_id = %group_id, count = sessions.len(), "Listed recent activity");

        Ok(ActivityFeedResponse::new(sessions))
    }
}
