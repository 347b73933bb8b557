//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod activity;
pub mod health;
pub mod leaderboard;
pub mod members;
