//! # activity-service
//!
//! Application layer containing the leaderboard engine, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
