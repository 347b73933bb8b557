//! Leaderboard handler

use activity_service::{LeaderboardQuery, LeaderboardResponse, LeaderboardService};
use axum::{
    extract::{Query, State},
    Json,
};

use crate::extractors::GroupId;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the playtime leaderboard of a workspace
///
/// GET /api/public/v1/workspace/{id}/leaderboard?userId=
pub async fn get_leaderboard(
    State(state): State<AppState>,
    GroupId(group_id): GroupId,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let service = LeaderboardService::new(state.service_context());
    let leaderboard = service.get_leaderboard(group_id, query.you()).await?;
    Ok(Json(LeaderboardResponse::from(leaderboard)))
}
