//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain values to response DTOs.

use activity_core::{
    ActivitySession, GroupMember, LeaderboardEntry, MemberRole, SessionCountEntry,
};

use super::responses::{
    EntryResponse, LeaderboardResponse, MemberResponse, RoleResponse, SessionCountResponse,
    SessionResponse, TopThree,
};
use crate::services::Leaderboard;

// ============================================================================
// Leaderboard Mappers
// ============================================================================

impl From<&LeaderboardEntry> for EntryResponse {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            id: entry.user_id.to_string(),
            position: entry.position,
            total: entry.total_seconds,
            in_game: entry.in_game,
        }
    }
}

impl From<&SessionCountEntry> for SessionCountResponse {
    fn from(entry: &SessionCountEntry) -> Self {
        Self {
            id: entry.user_id.to_string(),
            position: entry.position,
            total: entry.total,
        }
    }
}

impl From<Leaderboard> for LeaderboardResponse {
    fn from(leaderboard: Leaderboard) -> Self {
        Self {
            playtime: TopThree {
                top_three: leaderboard
                    .top_three
                    .iter()
                    .map(EntryResponse::from)
                    .collect(),
            },
            you: leaderboard.you.as_ref().map(EntryResponse::from),
            sessions: TopThree {
                top_three: leaderboard
                    .session_counts
                    .iter()
                    .map(SessionCountResponse::from)
                    .collect(),
            },
        }
    }
}

// ============================================================================
// Activity Mappers
// ============================================================================

/// Session with the username of its member joined in
#[derive(Debug, Clone)]
pub struct SessionWithMember {
    pub session: ActivitySession,
    pub username: Option<String>,
}

impl From<SessionWithMember> for SessionResponse {
    fn from(data: SessionWithMember) -> Self {
        let duration = data.session.duration_secs();
        let session = data.session;
        Self {
            id: session.id,
            user_id: session.user_id.to_string(),
            username: data.username,
            active: session.active,
            start_time: session.start_time,
            end_time: session.end_time,
            duration,
            messages: session.messages,
        }
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl From<MemberRole> for RoleResponse {
    fn from(role: MemberRole) -> Self {
        Self {
            id: role.id,
            name: role.name,
            permissions: role.permissions,
        }
    }
}

impl From<GroupMember> for MemberResponse {
    fn from(member: GroupMember) -> Self {
        Self {
            user_id: member.user_id.to_string(),
            username: member.username,
            thumbnail: member.picture,
            rank: member.rank,
            role: member.role.map(RoleResponse::from),
        }
    }
}
