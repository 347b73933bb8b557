//! Route definitions
//!
//! Public read-only routes are mounted under /api/public/v1.

use axum::{routing::get, Router};

use crate::handlers::{activity, health, leaderboard, members};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/public/v1", public_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Public API v1 routes
fn public_v1_routes() -> Router<AppState> {
    Router::new().merge(workspace_routes())
}

/// Workspace routes
fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/workspace/:id/leaderboard", get(leaderboard::get_leaderboard))
        .route("/workspace/:id/activity", get(activity::get_recent_activity))
        .route("/workspace/:id/members", get(members::get_members))
}
