//! # activity-core
//!
//! Domain layer containing activity entities, value objects, store traits, and errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    floor_seconds, ActivityAdjustment, ActivitySession, GroupConfig, GroupMember,
    LeaderboardEntry, MemberRole, ResetMarker, SessionCountEntry, MS_PER_MINUTE,
};
pub use error::DomainError;
pub use traits::{
    AdjustmentRepository, GroupConfigRepository, MemberRepository, RepoResult, ResetRepository,
    SessionQuery, SessionRepository,
};
pub use value_objects::{ActivityWindow, Snowflake, SnowflakeParseError};
