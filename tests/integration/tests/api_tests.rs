//! API Integration Tests
//!
//! Spawn the HTTP server on an ephemeral port, backed by in-memory stores.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use activity_core::{GroupConfig, MemberRole, Snowflake};
use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, ended_session, live_session, member, test_config_with,
    MemoryStore, StoreOp, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

const GROUP: Snowflake = Snowflake::new(4242);

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.add_member(member(GROUP, 1).with_picture("https://cdn.example/1.png")).await;
    store.add_member(member(GROUP, 2)).await;
    store.add_member(member(GROUP, 3)).await;
    store.add_member(member(GROUP, 4)).await;
    store.add_session(ended_session(GROUP, 1, Duration::hours(4), 60)).await;
    store.add_session(ended_session(GROUP, 2, Duration::hours(3), 30)).await;
    store.add_session(ended_session(GROUP, 2, Duration::hours(2), 15)).await;
    store.add_session(ended_session(GROUP, 3, Duration::hours(2), 10)).await;
    store.add_session(live_session(GROUP, 4, Duration::minutes(1))).await;
    store
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(MemoryStore::new().context())
        .await
        .expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_run_rejects_invalid_address() {
    let config = test_config_with(&[("API_HOST", "not a host")]).unwrap();
    let err = activity_api::run(config, MemoryStore::new().context())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start(MemoryStore::new().context()).await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_response() {
    let store = seeded_store().await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/leaderboard?userId=4")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let top = body["playtime"]["top_three"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["id"], "1");
    assert_eq!(top[0]["position"], 1);
    assert_eq!(top[0]["total"], 3600);
    assert_eq!(top[0]["in_game"], false);
    assert_eq!(top[1]["id"], "2");
    assert_eq!(top[1]["total"], 2700);
    assert_eq!(top[2]["id"], "3");

    assert_eq!(body["you"]["id"], "4");
    assert_eq!(body["you"]["position"], 4);
    assert_eq!(body["you"]["total"], 0);
    assert_eq!(body["you"]["in_game"], true);

    let sessions = body["sessions"]["top_three"].as_array().unwrap();
    assert_eq!(sessions[0]["id"], "1");
    assert_eq!(sessions[0]["total"], 1);
    assert_eq!(sessions[1]["id"], "2");
    assert_eq!(sessions[1]["position"], 2);
    assert_eq!(sessions[1]["total"], 2);
}

#[tokio::test]
async fn test_leaderboard_without_you_omits_field() {
    let store = seeded_store().await;
    let server = TestServer::start(store.context()).await.unwrap();

    for path in [
        "/api/public/v1/workspace/4242/leaderboard",
        "/api/public/v1/workspace/4242/leaderboard?userId=999",
        "/api/public/v1/workspace/4242/leaderboard?userId=abc",
    ] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(body.get("you").is_none(), "{path}");
    }
}

#[tokio::test]
async fn test_leaderboard_rank_gating() {
    let store = MemoryStore::new();
    store
        .set_config(
            GROUP,
            GroupConfig {
                rank_threshold: Some(100),
                idle_time_enabled: true,
            },
        )
        .await;
    store.add_member(member(GROUP, 1).with_rank(100)).await;
    store.add_member(member(GROUP, 2).with_rank(50)).await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/leaderboard?userId=2")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["playtime"]["top_three"].as_array().unwrap().len(), 1);
    assert!(body.get("you").is_none());
}

#[tokio::test]
async fn test_leaderboard_invalid_group_id() {
    let store = MemoryStore::new();
    let server = TestServer::start(store.context()).await.unwrap();

    for path in [
        "/api/public/v1/workspace/0/leaderboard",
        "/api/public/v1/workspace/abc/leaderboard",
    ] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body["error"]["code"], "INVALID_GROUP_ID", "{path}");
    }
    assert_eq!(store.reads(), 0);
}

#[tokio::test]
async fn test_leaderboard_store_failure() {
    let store = seeded_store().await;
    store.fail(StoreOp::Adjustments).await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/leaderboard")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body["error"]["code"], "AGGREGATION_FAILED");
    assert_eq!(body["error"]["message"], "Aggregation failed");
}

#[tokio::test]
async fn test_leaderboard_rejects_other_methods() {
    let server = TestServer::start(MemoryStore::new().context()).await.unwrap();
    let response = server
        .post_empty("/api/public/v1/workspace/4242/leaderboard")
        .await
        .unwrap();
    assert_status(response, StatusCode::METHOD_NOT_ALLOWED).await.unwrap();
}

// ============================================================================
// Activity Tests
// ============================================================================

#[tokio::test]
async fn test_recent_activity() {
    let store = seeded_store().await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/activity")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(body["total"], 5);
    assert_eq!(sessions.len(), 5);

    // Newest first: the live session started a minute ago
    assert_eq!(sessions[0]["user_id"], "4");
    assert_eq!(sessions[0]["active"], true);
    assert!(sessions[0].get("duration").is_none());
    assert_eq!(sessions[0]["username"], "user4");

    let last = &sessions[4];
    assert_eq!(last["user_id"], "1");
    assert_eq!(last["duration"], 3600);
}

#[tokio::test]
async fn test_recent_activity_filters() {
    let store = seeded_store().await;
    store.add_session(ended_session(GROUP, 9, Duration::minutes(30), 5)).await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/activity?userId=2&limit=1")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["user_id"], "2");
    assert_eq!(sessions[0]["duration"], 900);

    // Non-members are listed without a username
    let response = server
        .get("/api/public/v1/workspace/4242/activity?userId=9")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["total"], 1);
    assert!(body["sessions"][0].get("username").is_none());

    let start = (Utc::now() - Duration::minutes(150)).to_rfc3339();
    let response = server
        .client
        .get(format!("{}/api/public/v1/workspace/4242/activity", server.base_url()))
        .query(&[("startDate", start.as_str())])
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    // Sessions started 2h, 2h, 30m and 1m ago
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_recent_activity_validation() {
    let server = TestServer::start(MemoryStore::new().context()).await.unwrap();

    for query in ["limit=0", "limit=101", "limit=ten", "userId=abc", "startDate=yesterday"] {
        let response = server
            .get(&format!("/api/public/v1/workspace/4242/activity?{query}"))
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{query}");
    }
}

#[tokio::test]
async fn test_recent_activity_respects_configured_limit() {
    let store = seeded_store().await;
    let config = test_config_with(&[("ACTIVITY_RECENT_SESSION_LIMIT", "2")]).unwrap();
    let server = TestServer::start_with_config(store.context(), config).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/activity")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_recent_activity_store_failure() {
    let store = seeded_store().await;
    store.fail(StoreOp::RecentSessions).await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/activity")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body["error"]["message"], "Internal server error");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_member_directory() {
    let store = seeded_store().await;
    let role = MemberRole::new("role-admin", "Admin").with_permission("admin");
    store
        .add_member(member(GROUP, 5).with_rank(254).with_role(role))
        .await;
    let server = TestServer::start(store.context()).await.unwrap();

    let response = server
        .get("/api/public/v1/workspace/4242/members")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["total"], 5);
    let members = body["members"].as_array().unwrap();
    assert_eq!(members[0]["user_id"], "1");
    assert_eq!(members[0]["username"], "user1");
    assert_eq!(members[0]["thumbnail"], "https://cdn.example/1.png");
    assert!(members[0].get("rank").is_none());
    assert!(members[0].get("role").is_none());
    assert_eq!(members[4]["rank"], 254);
    assert_eq!(members[4]["role"]["id"], "role-admin");
    assert_eq!(members[4]["role"]["name"], "Admin");
    assert_eq!(members[4]["role"]["permissions"], serde_json::json!(["admin"]));
}

#[tokio::test]
async fn test_member_directory_invalid_group() {
    let server = TestServer::start(MemoryStore::new().context()).await.unwrap();
    let response = server
        .get("/api/public/v1/workspace/-3/members")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_GROUP_ID");
}
