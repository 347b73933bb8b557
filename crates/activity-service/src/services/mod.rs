//! Business logic services
//!
//! The ranking engine is pure; the services around it read from the stores
//! held by `ServiceContext` and shape the results.

pub mod activity;
pub mod context;
pub mod error;
pub mod leaderboard;
pub mod member;
pub mod ranking;
pub mod window;

pub use activity::ActivityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::{Leaderboard, LeaderboardService, Standings};
pub use member::MemberService;
pub use ranking::{PlaytimeTally, TOP_SLICE_SIZE};
pub use window::WindowResolver;
