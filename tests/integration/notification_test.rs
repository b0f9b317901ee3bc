//! Integration tests for notification endpoints.

use axum::http::StatusCode;

use amoria_entity::member::MemberRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_mark_read_rejects_malformed_keys() {
    let app = TestApp::new();
    let token = app.token(MemberRole::Member);

    for key in ["garbage", "like-not-a-uuid", "poke-00000000-0000-0000-0000-000000000000"] {
        let response = app
            .request("PUT", &format!("/api/notifications/{key}/read"), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "key: {key}");
        assert_eq!(
            response.body["error"]["code"],
            serde_json::json!("VALIDATION")
        );
    }
}

#[tokio::test]
async fn test_dismiss_rejects_malformed_keys() {
    let app = TestApp::new();
    let token = app.token(MemberRole::Member);

    let response = app
        .request("DELETE", "/api/notifications/garbage", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// DB-backed flow; needs PostgreSQL reachable at the configured URL.
#[tokio::test]
#[ignore]
async fn test_counts_are_zero_for_a_fresh_member() {
    let app = TestApp::new();
    let token = app.token(MemberRole::Member);

    let response = app
        .request("GET", "/api/notifications/counts", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["matches"], serde_json::json!(0));
    assert_eq!(data["messages"], serde_json::json!(0));
    assert_eq!(data["favorites"], serde_json::json!(0));
    assert_eq!(data["match_requests"], serde_json::json!(0));
}
