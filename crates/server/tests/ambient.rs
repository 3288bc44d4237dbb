//! Health, metrics, OpenAPI and static fallback.

mod common;

use axum::http::{Method, StatusCode};
use common::{add, memory_app, send};

#[tokio::test]
async fn health_is_ok_with_memory_store() {
    let (_, app) = memory_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}

#[tokio::test]
async fn metrics_count_list_operations() {
    let (_, app) = memory_app();
    add(&app, "counted").await;

    let (status, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().expect("plain text exposition");
    assert!(text.contains("shopping_list_requests_total{op=\"add\"}"));
}

#[tokio::test]
async fn openapi_documents_the_list_resource() {
    let (_, app) = memory_app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = &doc["paths"]["/api/list"];
    assert!(list["get"].is_object());
    assert!(list["post"].is_object());
    assert!(list["delete"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_static_ui() {
    let (_, app) = memory_app();
    // no UI directory in tests, so the fallback has nothing to serve
    let (status, _) = send(&app, Method::GET, "/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
