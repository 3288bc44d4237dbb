use sea_orm::{DatabaseConnection, DbErr};

use crate::errors::ServiceError;
use crate::shopping::repository::ShoppingRepository;
use models::shopping::{self, Model};

/// SeaORM-backed repository over the `shopping` table.
pub struct SeaOrmShoppingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmShoppingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Row decoding failures mean the store answered with an unexpected shape.
fn map_db_err(e: DbErr) -> ServiceError {
    match e {
        DbErr::Type(msg) => ServiceError::Malformed(msg),
        DbErr::TryIntoErr { .. } => ServiceError::Malformed(e.to_string()),
        other => ServiceError::Db(other.to_string()),
    }
}

#[async_trait::async_trait]
impl ShoppingRepository for SeaOrmShoppingRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        shopping::list_all(&self.db).await.map_err(map_db_err)
    }

    async fn insert(&self, title: &str) -> Result<Model, ServiceError> {
        let title = shopping::validate_title(title)?;
        shopping::insert_validated(&self.db, title).await.map_err(map_db_err)
    }

    async fn delete(&self, id: i64) -> Result<u64, ServiceError> {
        shopping::delete(&self.db, id).await.map_err(map_db_err)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        self.db.ping().await.map_err(map_db_err)
    }
}
