//! Member directory handler

use activity_service::{MemberListResponse, MemberService};
use axum::{extract::State, Json};

use crate::extractors::GroupId;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the members of a workspace
///
/// GET /api/public/v1/workspace/{id}/members
pub async fn get_members(
    State(state): State<AppState>,
    GroupId(group_id): GroupId,
) -> ApiResult<Json<MemberListResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.list_members(group_id).await?))
}
