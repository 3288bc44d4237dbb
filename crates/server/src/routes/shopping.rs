use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use service::{errors::ServiceError, ShoppingItem};
use tracing::{error, info, warn};

use crate::{errors::JsonApiError, observability, state::ServerState};

const FETCH_FAILED: &str = "Failed to fetch shopping list";
const ADD_FAILED: &str = "Failed to add item";
const DELETE_FAILED: &str = "Failed to delete item";
const TITLE_REQUIRED: &str = "Item name is required";
const ID_REQUIRED: &str = "Item ID is required";
const INVALID_BODY: &str = "Invalid request body";

#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteItemInput {
    #[serde(default, deserialize_with = "deserialize_item_id")]
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AddItemOutput {
    pub message: &'static str,
    pub data: Vec<ShoppingItem>,
}

#[derive(Debug, Serialize)]
pub struct MessageOutput {
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Number(i64),
    Text(String),
}

/// Ids are integers; browsers may still send them as strings. An empty
/// string and `0` count as absent.
fn deserialize_item_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<RawItemId>::deserialize(deserializer)? {
        None => None,
        Some(RawItemId::Number(n)) => Some(n),
        Some(RawItemId::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            let n = s
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid item id `{s}`")))?;
            Some(n)
        }
    };
    Ok(id.filter(|n| *n != 0))
}

fn invalid_body(op: &'static str, rejection: JsonRejection) -> JsonApiError {
    warn!(op, error = %rejection.body_text(), "rejected request body");
    observability::record_failure(op, "validation");
    JsonApiError::new(StatusCode::BAD_REQUEST, INVALID_BODY, Some(rejection.body_text()))
}

fn service_failure(op: &'static str, e: ServiceError, failed: &str, required: &str) -> JsonApiError {
    if e.is_validation() {
        observability::record_failure(op, "validation");
        return JsonApiError::bad_request(required);
    }
    let kind = match e {
        ServiceError::Malformed(_) => "malformed",
        _ => "store",
    };
    error!(op, kind, err = %e, "shopping operation failed");
    observability::record_failure(op, kind);
    JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failed, Some(e.to_string()))
}

#[utoipa::path(
    get, path = "/api/list", tag = "shopping",
    responses(
        (status = 200, description = "All items", body = [crate::openapi::ShoppingItemDoc]),
        (status = 500, description = "Failed to fetch shopping list", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ShoppingItem>>, JsonApiError> {
    observability::record_request("list");
    match state.shopping.list().await {
        Ok(items) => {
            info!(count = items.len(), "list shopping items");
            Ok(Json(items))
        }
        Err(e) => Err(service_failure("list", e, FETCH_FAILED, FETCH_FAILED)),
    }
}

#[utoipa::path(
    post, path = "/api/list", tag = "shopping",
    request_body = crate::openapi::AddItemRequestDoc,
    responses(
        (status = 200, description = "Item added successfully", body = crate::openapi::AddItemResponseDoc),
        (status = 400, description = "Item name is required", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Failed to add item", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    payload: Result<Json<AddItemInput>, JsonRejection>,
) -> Result<Json<AddItemOutput>, JsonApiError> {
    observability::record_request("add");
    let Json(input) = payload.map_err(|r| invalid_body("add", r))?;
    match state.shopping.add(input.title.as_deref()).await {
        Ok(item) => Ok(Json(AddItemOutput { message: "Item added successfully", data: vec![item] })),
        Err(e) => Err(service_failure("add", e, ADD_FAILED, TITLE_REQUIRED)),
    }
}

#[utoipa::path(
    delete, path = "/api/list", tag = "shopping",
    request_body = crate::openapi::DeleteItemRequestDoc,
    responses(
        (status = 200, description = "Item deleted successfully (also when no row matched)", body = crate::openapi::MessageResponseDoc),
        (status = 400, description = "Item ID is required", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Failed to delete item", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    payload: Result<Json<DeleteItemInput>, JsonRejection>,
) -> Result<Json<MessageOutput>, JsonApiError> {
    observability::record_request("delete");
    let Json(input) = payload.map_err(|r| invalid_body("delete", r))?;
    match state.shopping.delete(input.id).await {
        Ok(()) => Ok(Json(MessageOutput { message: "Item deleted successfully" })),
        Err(e) => Err(service_failure("delete", e, DELETE_FAILED, ID_REQUIRED)),
    }
}
