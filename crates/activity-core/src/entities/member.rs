//! Member entity - represents a user's membership in a group

use serde::{Deserialize, Serialize};

use super::role::MemberRole;
use crate::value_objects::Snowflake;

/// Group member, optionally carrying the member's numeric rank and role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub group_id: Snowflake,
    pub user_id: Snowflake,
    pub username: String,
    pub picture: Option<String>,
    /// Only populated when the store was asked for ranks
    pub rank: Option<i64>,
    /// Only populated when the store was asked for ranks
    #[serde(default)]
    pub role: Option<MemberRole>,
}

impl GroupMember {
    /// Create a new GroupMember without rank
    pub fn new(group_id: Snowflake, user_id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            group_id,
            user_id,
            username: username.into(),
            picture: None,
            rank: None,
            role: None,
        }
    }

    /// Set the member's rank
    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Set the member's workspace role
    pub fn with_role(mut self, role: MemberRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the member's picture
    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Check whether the member may appear on a leaderboard gated at `threshold`
    ///
    /// Without a threshold everyone qualifies. With one, the rank must be
    /// present and at least the threshold.
    pub fn meets_rank(&self, threshold: Option<i64>) -> bool {
        match threshold {
            None => true,
            Some(min) => self.rank.is_some_and(|rank| rank >= min),
        }
    }
}
