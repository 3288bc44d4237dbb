use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub db_healthy: bool }

#[derive(ToSchema)]
pub struct ShoppingItemDoc {
    pub id: i64,
    pub title: String,
    #[schema(example = "2025-01-01T09:30:00+00:00")]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct AddItemRequestDoc {
    /// Trimmed before storing; must not be blank.
    pub title: String,
}

#[derive(ToSchema)]
pub struct DeleteItemRequestDoc {
    /// Integer id; a string holding an integer is accepted too.
    pub id: i64,
}

#[derive(ToSchema)]
pub struct AddItemResponseDoc {
    pub message: String,
    pub data: Vec<ShoppingItemDoc>,
}

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub message: String, pub error: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::shopping::list,
        crate::routes::shopping::add,
        crate::routes::shopping::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ShoppingItemDoc,
            AddItemRequestDoc,
            DeleteItemRequestDoc,
            AddItemResponseDoc,
            MessageResponseDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "shopping")
    )
)]
pub struct ApiDoc;
