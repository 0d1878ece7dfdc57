mod common;

use auth::Claims;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;

    let response = app
        .post("/auth/token")
        .json(&json!({
            "email": "victor@email.com",
            "password": "pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "Bearer");
    let token = body["access_token"].as_str().expect("Token missing");

    // Subject is the user's email and expiry lies in the future
    let claims: Claims = app.jwt_handler.decode(token).expect("Token should decode");
    assert_eq!(claims.sub.as_deref(), Some("victor@email.com"));
    assert!(claims.exp.unwrap() > chrono::Utc::now().timestamp());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;

    // Correct email, wrong password
    let wrong_password = app
        .post("/auth/token")
        .json(&json!({
            "email": "victor@email.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unregistered email
    let unknown_email = app
        .post("/auth/token")
        .json(&json!({
            "email": "ghost@email.com",
            "password": "pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json().await.expect("Failed to parse");
    let second: serde_json::Value = unknown_email.json().await.expect("Failed to parse");

    // Identical status and body for both failure modes
    assert_eq!(first, second);
    assert_eq!(first, json!({ "detail": "incorrect email or password" }));
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/users", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "could not validate credentials" }));
}

#[tokio::test]
async fn test_token_without_subject_is_rejected() {
    let app = TestApp::spawn().await;

    // Structurally valid, correctly signed token missing the sub claim
    let claims = Claims::new().with_extra("invalid", "payload");
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .get_authenticated("/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "could not validate credentials" }));
}

#[tokio::test]
async fn test_token_for_unknown_subject_is_rejected() {
    let app = TestApp::spawn().await;

    // Valid token whose subject no longer resolves; same generic outcome
    let claims = Claims::for_subject("ghost@email.com", 30);
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .get_authenticated("/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "could not validate credentials" }));
}

#[tokio::test]
async fn test_expired_token_fails_generically() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;

    // Expired well past jsonwebtoken's default leeway
    let claims = Claims::new()
        .with_subject("victor@email.com")
        .with_expiration(1000);
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .get_authenticated("/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // No distinct "expired" detail
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "could not validate credentials" }));
}

#[tokio::test]
async fn test_missing_authorization_header_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/refresh_token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "could not validate credentials" }));
}

#[tokio::test]
async fn test_refresh_token() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .post_authenticated("/auth/refresh_token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "Bearer");

    // The refreshed token carries the same subject and works against the API
    let refreshed = body["access_token"].as_str().expect("Token missing");
    let claims: Claims = app
        .jwt_handler
        .decode(refreshed)
        .expect("Token should decode");
    assert_eq!(claims.sub.as_deref(), Some("victor@email.com"));

    let response = app
        .get_authenticated("/users", refreshed)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}
