use std::path::Path;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::{observability, openapi::ApiDoc, state::ServerState};

pub mod shopping;

/// Collection resource for the list operations.
pub const LIST_PATH: &str = "/api/list";

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Process is up; db_healthy reports the store", body = crate::openapi::HealthResponse))
)]
pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    Json(Health::new(state.shopping.ping().await))
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: list API, ambient endpoints, and the
/// static UI as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let index = Path::new(frontend_dir).join("index.html");
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let api = Router::new().route(
        LIST_PATH,
        get(shopping::list).post(shopping::add).delete(shopping::delete),
    );

    let ambient = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    ambient
        .merge(api)
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
