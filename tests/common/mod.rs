#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use visualist::api::handlers::health_handler;
use visualist::api::routes::api_routes;
use visualist::state::AppState;
use visualist::web::routes::public_routes;

/// Full application router over a fresh in-memory store.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .merge(public_routes())
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(AppState::in_memory())).unwrap()
}

pub async fn root_id(server: &TestServer) -> i64 {
    let json = server.get("/api/pages").await.json::<Value>();
    json["items"][0]["id"].as_i64().unwrap()
}

/// Creates a container page and returns its id.
pub async fn create_page(server: &TestServer, kind: &str, parent_id: i64, title: &str) -> i64 {
    let response = server
        .post("/api/pages")
        .json(&json!({"kind": kind, "parent_id": parent_id, "title": title}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Creates a content record and returns its page id.
pub async fn create_record(server: &TestServer, body: Value) -> i64 {
    let response = server.post("/api/records").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["page"]["id"].as_i64().unwrap()
}

pub async fn create_event(server: &TestServer, parent_id: i64, title: &str, tags: &[&str]) -> i64 {
    create_record(
        server,
        json!({
            "parent_id": parent_id,
            "title": title,
            "details": {"type": "event", "start_date": "2024-06-01T19:00:00Z", "tags": tags}
        }),
    )
    .await
}

pub async fn create_snippet(server: &TestServer, kind: &str, body: Value) -> i64 {
    let response = server.post(&format!("/api/snippets/{kind}")).json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn publish_at(server: &TestServer, id: i64, at: &str) {
    server
        .post(&format!("/api/pages/{id}/publish"))
        .json(&json!({"at": at}))
        .await
        .assert_status_ok();
}

pub async fn publish(server: &TestServer, id: i64) {
    server
        .post(&format!("/api/pages/{id}/publish"))
        .await
        .assert_status_ok();
}

/// Titles of a `{"items": [...]}` page list.
pub fn titles(json: &Value) -> Vec<String> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}
