#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{routes, state::ServerState};
use service::shopping::repository::{memory::InMemoryShoppingRepository, ShoppingRepository};

/// Router over the given repository, same layers as production. The UI
/// directory does not exist, so fallback routes answer 404.
pub fn app_with(repo: Arc<dyn ShoppingRepository>) -> Router {
    routes::build_router(
        ServerState::with_repository(repo),
        CorsLayer::very_permissive(),
        "target/test-no-frontend",
    )
}

pub fn memory_app() -> (Arc<InMemoryShoppingRepository>, Router) {
    let repo = Arc::new(InMemoryShoppingRepository::new());
    (repo.clone(), app_with(repo))
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Send a request with an optional JSON body; returns status and parsed body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

/// Send raw bytes with an explicit content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn fetch(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/api/list", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().cloned().expect("list body is an array")
}

pub async fn add(app: &Router, title: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/list", Some(serde_json::json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::OK, "add failed: {body}");
    body["data"][0].clone()
}
