mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn create_todo(app: &TestApp, token: &str, title: &str, state: &str) -> i64 {
    let response = app
        .post_authenticated("/todos", token)
        .json(&json!({
            "title": title,
            "description": "test",
            "state": state
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("Todo id missing from response")
}

#[tokio::test]
async fn test_create_todo() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .post_authenticated("/todos", &token)
        .json(&json!({
            "title": "buy milk",
            "description": "two liters",
            "state": "todo"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "buy milk");
    assert_eq!(body["description"], "two liters");
    assert_eq!(body["state"], "todo");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_todo_defaults_to_todo_state() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .post_authenticated("/todos", &token)
        .json(&json!({
            "title": "buy milk",
            "description": "two liters"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["state"], "todo");
}

#[tokio::test]
async fn test_create_todo_invalid_state() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .post_authenticated("/todos", &token)
        .json(&json!({
            "title": "buy milk",
            "description": "two liters",
            "state": "urgent"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "invalid value for todo" }));
}

#[tokio::test]
async fn test_create_todo_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/todos")
        .json(&json!({
            "title": "buy milk",
            "description": "two liters"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_todos_only_returns_own() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    app.register_user("walter", "walter@email.com", "pw").await;
    let victor_token = app.login("victor@email.com", "pw").await;
    let walter_token = app.login("walter@email.com", "pw").await;

    create_todo(&app, &victor_token, "victors chore", "todo").await;
    create_todo(&app, &walter_token, "walters chore", "todo").await;

    let response = app
        .get_authenticated("/todos", &victor_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let todos = body["todos"].as_array().expect("todos array missing");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "victors chore");
}

#[tokio::test]
async fn test_list_todos_filters() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    create_todo(&app, &token, "buy milk", "todo").await;
    create_todo(&app, &token, "buy bread", "done").await;
    create_todo(&app, &token, "call mom", "done").await;

    // Substring title filter
    let response = app
        .get_authenticated("/todos?title=buy", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["todos"].as_array().unwrap().len(), 2);

    // Exact state filter
    let response = app
        .get_authenticated("/todos?state=done", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["todos"].as_array().unwrap().len(), 2);

    // Combined
    let response = app
        .get_authenticated("/todos?title=buy&state=done", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "buy bread");

    // Offset/limit window
    let response = app
        .get_authenticated("/todos?limit=1&offset=2", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "call mom");
}

#[tokio::test]
async fn test_list_todos_invalid_state_filter() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .get_authenticated("/todos?state=urgent", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_todo_partial() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;
    let todo_id = create_todo(&app, &token, "buy milk", "todo").await;

    let response = app
        .patch_authenticated(&format!("/todos/{}", todo_id), &token)
        .json(&json!({ "state": "done" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // Unsent fields are untouched
    assert_eq!(body["title"], "buy milk");
    assert_eq!(body["description"], "test");
    assert_eq!(body["state"], "done");
}

#[tokio::test]
async fn test_update_todo_invalid_state() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;
    let todo_id = create_todo(&app, &token, "buy milk", "todo").await;

    let response = app
        .patch_authenticated(&format!("/todos/{}", todo_id), &token)
        .json(&json!({ "state": "urgent" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "invalid value for todo" }));
}

#[tokio::test]
async fn test_update_todo_not_found() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;

    let response = app
        .patch_authenticated("/todos/999", &token)
        .json(&json!({ "state": "done" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "todo not found" }));
}

#[tokio::test]
async fn test_update_other_users_todo_is_forbidden() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    app.register_user("walter", "walter@email.com", "pw").await;
    let victor_token = app.login("victor@email.com", "pw").await;
    let walter_token = app.login("walter@email.com", "pw").await;

    let todo_id = create_todo(&app, &walter_token, "walters chore", "todo").await;

    let response = app
        .patch_authenticated(&format!("/todos/{}", todo_id), &victor_token)
        .json(&json!({ "state": "trash" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "detail": "not enough permission" }));
}

#[tokio::test]
async fn test_delete_todo() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;
    let todo_id = create_todo(&app, &token, "buy milk", "todo").await;

    let response = app
        .delete_authenticated(&format!("/todos/{}", todo_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "deleted" }));

    // Deleting again reports not found
    let response = app
        .delete_authenticated(&format!("/todos/{}", todo_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_other_users_todo_is_forbidden() {
    let app = TestApp::spawn().await;

    app.register_user("victor", "victor@email.com", "pw").await;
    app.register_user("walter", "walter@email.com", "pw").await;
    let victor_token = app.login("victor@email.com", "pw").await;
    let walter_token = app.login("walter@email.com", "pw").await;

    let todo_id = create_todo(&app, &walter_token, "walters chore", "todo").await;

    let response = app
        .delete_authenticated(&format!("/todos/{}", todo_id), &victor_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_todos() {
    let app = TestApp::spawn().await;

    let user_id = app.register_user("victor", "victor@email.com", "pw").await;
    let token = app.login("victor@email.com", "pw").await;
    create_todo(&app, &token, "buy milk", "todo").await;
    create_todo(&app, &token, "buy bread", "todo").await;

    let response = app
        .delete_authenticated(&format!("/users/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(&app.db.pool)
        .await
        .expect("Failed to count todos");
    assert_eq!(remaining, 0);
}
