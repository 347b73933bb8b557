//! Member service

use activity_core::{DomainError, Snowflake};
use tracing::{debug, error, instrument};

use crate::dto::{MemberListResponse, MemberResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the members of a group in store order, with their rank and role
    #[instrument(skip(self))]
    pub async fn list_members(&self, group_id: Snowflake) -> ServiceResult<MemberListResponse> {
        if group_id.is_zero() {
            return Err(DomainError::InvalidGroupId.into());
        }

        let members = self
            .ctx
            .member_repo()
            .find_by_group(group_id, true)
            .await
            .map_err(|e| {
                error!(group_id = %group_id, error = %e, "Failed to load members");
                e
            })?;

        debug!(group_id = %group_id, count = members.len(), "Listed members");

        Ok(MemberListResponse::new(
            members.into_iter().map(MemberResponse::from).collect(),
        ))
    }
}
