//! Integration tests for the account and session handlers
mod common;

use crate::common::{create_test_app, get, post_json, send};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

// =========================================================================
// Register
// =========================================================================

#[tokio::test]
async fn test_register_success() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/register",
            json!({"username": "alice", "password": "pw"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "username": "alice"}));
}

#[tokio::test]
async fn test_register_duplicate_rejected() {
    let (app, _temp) = create_test_app();
    let request = || {
        post_json(
            "/api/auth/register",
            json!({"username": "alice", "password": "pw"}),
        )
    };

    send(&app, request()).await;
    let (status, body) = send(&app, request()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already exists");
}

#[tokio::test]
async fn test_register_missing_password_rejected() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(
        &app,
        post_json("/api/auth/register", json!({"username": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username and password are required");
}

#[tokio::test]
async fn test_register_empty_username_rejected() {
    let (app, _temp) = create_test_app();

    let (status, _) = send(
        &app,
        post_json(
            "/api/auth/register",
            json!({"username": "", "password": "pw"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_json_rejected_with_error_field() {
    let (app, _temp) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =========================================================================
// Login
// =========================================================================

#[tokio::test]
async fn test_login_after_register() {
    let (app, _temp) = create_test_app();
    send(
        &app,
        post_json(
            "/api/auth/register",
            json!({"username": "alice", "password": "pw"}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({"username": "alice", "password": "pw"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let (app, _temp) = create_test_app();
    send(
        &app,
        post_json(
            "/api/auth/register",
            json!({"username": "alice", "password": "pw"}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({"username": "alice", "password": "wrong"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user_unauthorized() {
    let (app, _temp) = create_test_app();

    let (status, _) = send(
        &app,
        post_json("/api/auth/login", json!({"username": "ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =========================================================================
// Sessions
// =========================================================================

#[tokio::test]
async fn test_add_list_remove_sessions() {
    let (app, _temp) = create_test_app();

    for id in ["s1", "s2"] {
        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/add_session",
                json!({"username": "alice", "sessionId": id}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    let (status, body) = send(&app, get("/api/auth/user_sessions?username=alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["s1", "s2"]));

    send(
        &app,
        post_json(
            "/api/auth/remove_session",
            json!({"username": "alice", "sessionId": "s1"}),
        ),
    )
    .await;

    let (_, body) = send(&app, get("/api/auth/user_sessions?username=alice")).await;
    assert_eq!(body, json!(["s2"]));
}

#[tokio::test]
async fn test_user_sessions_decodes_username() {
    let (app, _temp) = create_test_app();
    send(
        &app,
        post_json(
            "/api/auth/add_session",
            json!({"username": "a b&c", "sessionId": "x"}),
        ),
    )
    .await;

    let (_, body) = send(&app, get("/api/auth/user_sessions?username=a%20b%26c")).await;

    assert_eq!(body, json!(["x"]));
}

#[tokio::test]
async fn test_user_sessions_unknown_user_empty() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(&app, get("/api/auth/user_sessions?username=nobody")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_user_sessions_missing_username_rejected() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(&app, get("/api/auth/user_sessions")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "username is required");
}

#[tokio::test]
async fn test_add_session_missing_session_id_rejected() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(
        &app,
        post_json("/api/auth/add_session", json!({"username": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "username and sessionId are required");
}

#[tokio::test]
async fn test_health() {
    let (app, _temp) = create_test_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
