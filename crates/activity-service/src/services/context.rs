//! Service context - dependency container for services
//!
//! Holds the store implementations the services read from.

use std::sync::Arc;

use activity_core::traits::{
    AdjustmentRepository, GroupConfigRepository, MemberRepository, ResetRepository,
    SessionRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every store is behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    reset_repo: Arc<dyn ResetRepository>,
    config_repo: Arc<dyn GroupConfigRepository>,
    session_repo: Arc<dyn SessionRepository>,
    adjustment_repo: Arc<dyn AdjustmentRepository>,
    member_repo: Arc<dyn MemberRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reset_repo: Arc<dyn ResetRepository>,
        config_repo: Arc<dyn GroupConfigRepository>,
        session_repo: Arc<dyn SessionRepository>,
        adjustment_repo: Arc<dyn AdjustmentRepository>,
        member_repo: Arc<dyn MemberRepository>,
    ) -> Self {
        Self {
            reset_repo,
            config_repo,
            session_repo,
            adjustment_repo,
            member_repo,
        }
    }

    /// Get the reset marker repository
    pub fn reset_repo(&self) -> &dyn ResetRepository {
        self.reset_repo.as_ref()
    }

    /// Get the group settings repository
    pub fn config_repo(&self) -> &dyn GroupConfigRepository {
        self.config_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    /// Get the adjustment repository
    pub fn adjustment_repo(&self) -> &dyn AdjustmentRepository {
        self.adjustment_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    reset_repo: Option<Arc<dyn ResetRepository>>,
    config_repo: Option<Arc<dyn GroupConfigRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    adjustment_repo: Option<Arc<dyn AdjustmentRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_repo(mut self, repo: Arc<dyn ResetRepository>) -> Self {
        self.reset_repo = Some(repo);
        self
    }

    pub fn config_repo(mut self, repo: Arc<dyn GroupConfigRepository>) -> Self {
        self.config_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn adjustment_repo(mut self, repo: Arc<dyn AdjustmentRepository>) -> Self {
        self.adjustment_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            required(self.reset_repo, "reset_repo")?,
            required(self.config_repo, "config_repo")?,
            required(self.session_repo, "session_repo")?,
            required(self.adjustment_repo, "adjustment_repo")?,
            required(self.member_repo, "member_repo")?,
        ))
    }
}

fn required<T>(dependency: Option<T>, name: &str) -> ServiceResult<T> {
    dependency.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
