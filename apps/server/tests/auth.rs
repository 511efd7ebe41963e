mod common;

use axum::http::StatusCode;
use common::{build_test_app, UNREACHABLE_UPSTREAM};
use serde_json::json;

#[tokio::test]
async fn login_and_read_session() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, true).await;

    let (status, body) = app.get("/api/auth/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"enabled": true}));

    let (status, _) = app
        .post_json(
            "/api/register",
            &json!({"name": "Asha", "email": "asha@example.com", "password": "correct horse"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            &json!({"email": "asha@example.com", "password": "wrong horse"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            &json!({"email": "asha@example.com", "password": "correct horse"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 86_400);
    let token = body["accessToken"].as_str().unwrap().to_string();

    let (status, _) = app.get("/api/auth/session").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get_with_token("/api/auth/session", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, profile) = app.get_with_token("/api/auth/session", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "asha@example.com");
    assert_eq!(profile["name"], "Asha");
    assert_eq!(profile["emailVerified"], false);
    assert!(profile.get("passwordHash").is_none());
}

#[tokio::test]
async fn auth_disabled_without_secret() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, false).await;

    let (status, body) = app.get("/api/auth/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"enabled": false}));

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            &json!({"email": "asha@example.com", "password": "correct horse"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Authentication is not configured");

    let (status, _) = app.get_with_token("/api/auth/session", "anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The rest of the API is unaffected.
    let (status, _) = app.get("/api/stocks").await;
    assert_eq!(status, StatusCode::OK);
}
