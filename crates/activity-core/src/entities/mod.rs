//! Domain entities - core business objects

mod adjustment;
mod config;
mod leaderboard;
mod member;
mod reset;
mod role;
mod session;

pub use adjustment::ActivityAdjustment;
pub use config::GroupConfig;
pub use leaderboard::{floor_seconds, LeaderboardEntry, SessionCountEntry};
pub use member::GroupMember;
pub use reset::ResetMarker;
pub use role::MemberRole;
pub use session::{ActivitySession, MS_PER_MINUTE};
