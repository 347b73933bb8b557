//! Window resolver
//!
//! The aggregation window runs from the group's latest reset (or the default
//! epoch) to the moment of the request.

use activity_core::{ActivityWindow, RepoResult, Snowflake};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use super::context::ServiceContext;

/// Resolves the leaderboard window of a group
pub struct WindowResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WindowResolver<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Window ending now
    pub async fn resolve(&self, group_id: Snowflake) -> RepoResult<ActivityWindow> {
        self.resolve_at(group_id, Utc::now()).await
    }

    /// Window ending at `now`
    #[instrument(skip(self))]
    pub async fn resolve_at(
        &self,
        group_id: Snowflake,
        now: DateTime<Utc>,
    ) -> RepoResult<ActivityWindow> {
        let reset = self.ctx.reset_repo().find_latest(group_id).await?;
        let window = ActivityWindow::since_reset(reset.map(|r| r.reset_at), now);

        debug!(
            group_id = %group_id,
            start = %window.start,
            end = %window.end,
            "Resolved activity window"
        );
        Ok(window)
    }
}
