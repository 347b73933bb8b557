//! Leaderboard ranking engine
//!
//! Pure, synchronous transforms over records that were already fetched.
//! Nothing here touches a store or keeps state between calls.

use std::collections::{HashMap, HashSet};

use activity_core::{
    ActivityAdjustment, ActivitySession, ActivityWindow, GroupConfig, GroupMember,
    LeaderboardEntry, RepoResult, SessionCountEntry, Snowflake,
};

/// Number of entries shown in a leaderboard's top slice
pub const TOP_SLICE_SIZE: usize = 3;

/// Per-request playtime accumulator, in milliseconds
#[derive(Debug, Default)]
pub struct PlaytimeTally {
    totals: HashMap<Snowflake, i64>,
}

impl PlaytimeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the effective duration of every qualifying session
    ///
    /// Fails with `MalformedRecord` on a session that ends before it starts.
    pub fn add_sessions(
        &mut self,
        sessions: &[ActivitySession],
        window: &ActivityWindow,
        idle_time_enabled: bool,
    ) -> RepoResult<()> {
        for session in sessions.iter().filter(|s| s.qualifies_for(window)) {
            session.ensure_well_formed()?;
            if let Some(effective) = session.effective_ms(idle_time_enabled) {
                self.add(session.user_id, effective);
            }
        }
        Ok(())
    }

    /// Add every qualifying adjustment, keeping its sign
    pub fn add_adjustments(
        &mut self,
        adjustments: &[ActivityAdjustment],
        window: &ActivityWindow,
    ) {
        for adjustment in adjustments.iter().filter(|a| a.qualifies_for(window)) {
            self.add(adjustment.user_id, adjustment.delta_ms());
        }
    }

    /// Accumulated milliseconds of a user (zero when untouched)
    pub fn total_ms(&self, user_id: Snowflake) -> i64 {
        self.totals.get(&user_id).copied().unwrap_or(0)
    }

    fn add(&mut self, user_id: Snowflake, ms: i64) {
        let total = self.totals.entry(user_id).or_insert(0);
        *total = total.saturating_add(ms);
    }
}

/// Build the gated, sorted, positioned playtime ranking
///
/// Every member passing the rank gate appears exactly once, even with no
/// activity. Order is total seconds descending, then user id ascending.
pub fn rank_members(
    tally: &PlaytimeTally,
    members: &[GroupMember],
    rank_threshold: Option<i64>,
) -> Vec<LeaderboardEntry> {
    let mut seen = HashSet::with_capacity(members.len());
    let mut entries: Vec<LeaderboardEntry> = members
        .iter()
        .filter(|m| m.meets_rank(rank_threshold))
        .filter(|m| seen.insert(m.user_id))
        .map(|m| LeaderboardEntry::from_millis(m.user_id, tally.total_ms(m.user_id)))
        .collect();

    entries.sort_by(|a, b| {
        b.total_seconds
            .cmp(&a.total_seconds)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }

    entries
}

/// Run the full engine over one snapshot of a group's records
pub fn compute_leaderboard(
    window: &ActivityWindow,
    config: &GroupConfig,
    sessions: &[ActivitySession],
    adjustments: &[ActivityAdjustment],
    members: &[GroupMember],
) -> RepoResult<Vec<LeaderboardEntry>> {
    let mut tally = PlaytimeTally::new();
    tally.add_sessions(sessions, window, config.idle_time_enabled)?;
    tally.add_adjustments(adjustments, window);
    Ok(rank_members(&tally, members, config.threshold()))
}

/// Flag entries whose user currently has a live session
pub fn overlay_active(entries: &mut [LeaderboardEntry], active_user_ids: &HashSet<Snowflake>) {
    for entry in entries.iter_mut() {
        entry.in_game = active_user_ids.contains(&entry.user_id);
    }
}

/// The first `TOP_SLICE_SIZE` entries
pub fn top_slice(entries: &[LeaderboardEntry]) -> &[LeaderboardEntry] {
    &entries[..entries.len().min(TOP_SLICE_SIZE)]
}

/// Locate a user anywhere in the full ranking
pub fn find_entry(
    entries: &[LeaderboardEntry],
    user_id: Option<Snowflake>,
) -> Option<LeaderboardEntry> {
    let user_id = user_id?;
    entries.iter().find(|e| e.user_id == user_id).copied()
}

/// Pair each top entry with its session count
///
/// Positions are taken from the playtime ranking and the list keeps that
/// order; it is never re-sorted by count.
pub fn session_count_ranking(
    top: &[LeaderboardEntry],
    counts: &HashMap<Snowflake, i64>,
) -> Vec<SessionCountEntry> {
    top.iter()
        .map(|entry| SessionCountEntry {
            user_id: entry.user_id,
            position: entry.position,
            total: counts.get(&entry.user_id).copied().unwrap_or(0),
        })
        .collect()
}

/// Count qualifying sessions per user, limited to `user_ids`
///
/// Mirrors what `SessionRepository::count_for_users` is expected to return.
pub fn count_sessions(
    sessions: &[ActivitySession],
    window: &ActivityWindow,
    user_ids: &[Snowflake],
) -> HashMap<Snowflake, i64> {
    let mut counts = HashMap::with_capacity(user_ids.len());
    for session in sessions
        .iter()
        .filter(|s| s.qualifies_for(window) && user_ids.contains(&s.user_id))
    {
        *counts.entry(session.user_id).or_insert(0) += 1;
    }
    counts
}
