//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain values to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ActivityQuery, LeaderboardQuery};

pub use responses::{
    ActivityFeedResponse, EntryResponse, HealthResponse, LeaderboardResponse, MemberListResponse,
    MemberResponse, RoleResponse, SessionCountResponse, SessionResponse, TopThree,
};

pub use mappers::SessionWithMember;
