//! Activity feed handler

use activity_service::{ActivityFeedResponse, ActivityQuery, ActivityService};
use axum::{extract::State, Json};

use crate::extractors::{GroupId, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get recent activity sessions of a workspace
///
/// GET /api/public/v1/workspace/{id}/activity?userId=&startDate=&endDate=&limit=
pub async fn get_recent_activity(
    State(state): State<AppState>,
    GroupId(group_id): GroupId,
    ValidatedQuery(query): ValidatedQuery<ActivityQuery>,
) -> ApiResult<Json<ActivityFeedResponse>> {
    let service = ActivityService::new(state.service_context());
    let feed = service
        .recent_sessions(group_id, &query, state.recent_session_limit())
        .await?;
    Ok(Json(feed))
}
