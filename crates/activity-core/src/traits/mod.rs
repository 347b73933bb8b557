//! Store traits (ports)

mod repositories;

pub use repositories::{
    AdjustmentRepository, GroupConfigRepository, MemberRepository, RepoResult, ResetRepository,
    SessionQuery, SessionRepository,
};
