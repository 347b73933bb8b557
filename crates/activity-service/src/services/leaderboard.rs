//! Leaderboard service
//!
//! Reads one snapshot of a group's records and runs the ranking engine over it.

use activity_core::{
    ActivityWindow, DomainError, LeaderboardEntry, RepoResult, SessionCountEntry, Snowflake,
};
use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ranking;
use super::window::WindowResolver;

/// Full ranking of a group, before slicing for presentation
#[derive(Debug, Clone)]
pub struct Standings {
    pub window: ActivityWindow,
    pub entries: Vec<LeaderboardEntry>,
}

/// Presentation slices of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    /// At most three entries by playtime
    pub top_three: Vec<LeaderboardEntry>,
    /// The requesting user's entry, searched in the full ranking
    pub you: Option<LeaderboardEntry>,
    /// Session counts of the `top_three` users, in the same order
    pub session_counts: Vec<SessionCountEntry>,
}

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the leaderboard of a group
    ///
    /// # Errors
    /// - `InvalidGroupId` for a zero group id, before any store is read
    /// - `AggregationFailed` if any store read fails or returns a malformed record
    pub async fn get_leaderboard(
        &self,
        group_id: Snowflake,
        you: Option<Snowflake>,
    ) -> ServiceResult<Leaderboard> {
        self.get_leaderboard_at(group_id, you, Utc::now()).await
    }

    /// Compute the leaderboard of a group as of `now`
    #[instrument(skip(self))]
    pub async fn get_leaderboard_at(
        &self,
        group_id: Snowflake,
        you: Option<Snowflake>,
        now: DateTime<Utc>,
    ) -> ServiceResult<Leaderboard> {
        if group_id.is_zero() {
            return Err(DomainError::InvalidGroupId.into());
        }

        let leaderboard = self.build(group_id, you, now).await.map_err(|e| {
            error!(group_id = %group_id, error = %e, "Failed to compute leaderboard");
            ServiceError::AggregationFailed
        })?;

        info!(
            group_id = %group_id,
            top = leaderboard.top_three.len(),
            you_found = leaderboard.you.is_some(),
            "Computed leaderboard"
        );

        Ok(leaderboard)
    }

    /// Full, positioned ranking with the live-session overlay applied
    pub async fn compute_standings(
        &self,
        group_id: Snowflake,
        now: DateTime<Utc>,
    ) -> RepoResult<Standings> {
        let resolver = WindowResolver::new(self.ctx);
        let (window, config) = tokio::try_join!(
            resolver.resolve_at(group_id, now),
            self.ctx.config_repo().get_config(group_id),
        )?;

        let (sessions, adjustments, members, active) = tokio::try_join!(
            self.ctx.session_repo().find_ended_in_window(group_id, &window),
            self.ctx.adjustment_repo().find_in_window(group_id, &window),
            self.ctx.member_repo().find_by_group(group_id, config.needs_rank()),
            self.ctx.session_repo().find_active_user_ids(group_id),
        )?;

        let mut entries =
            ranking::compute_leaderboard(&window, &config, &sessions, &adjustments, &members)?;
        ranking::overlay_active(&mut entries, &active);

        Ok(Standings { window, entries })
    }

    async fn build(
        &self,
        group_id: Snowflake,
        you: Option<Snowflake>,
        now: DateTime<Utc>,
    ) -> RepoResult<Leaderboard> {
        let standings = self.compute_standings(group_id, now).await?;
        let top = ranking::top_slice(&standings.entries);

        let session_counts = if top.is_empty() {
            Vec::new()
        } else {
            let user_ids: Vec<Snowflake> = top.iter().map(|e| e.user_id).collect();
            let counts = self
                .ctx
                .session_repo()
                .count_for_users(group_id, &standings.window, &user_ids)
                .await?;
            ranking::session_count_ranking(top, &counts)
        };

        Ok(Leaderboard {
            top_three: top.to_vec(),
            you: ranking::find_entry(&standings.entries, you),
            session_counts,
        })
    }
}
