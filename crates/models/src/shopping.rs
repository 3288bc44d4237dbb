//! `shopping` table: one row per list entry.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and reject blank titles. Returns the value to store.
pub fn validate_title(title: &str) -> Result<String, ModelError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("title must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Insert one row and return it as stored (INSERT ... RETURNING).
pub async fn create<C: ConnectionTrait>(db: &C, title: &str) -> Result<Model, ModelError> {
    let title = validate_title(title)?;
    insert_validated(db, title).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert an already validated title. Decode failures on the returned row
/// surface as `DbErr::Type`.
pub async fn insert_validated<C: ConnectionTrait>(db: &C, title: String) -> Result<Model, DbErr> {
    let am = ActiveModel {
        title: Set(title),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await
}

/// Every row, oldest id first.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(db).await
}

/// Delete by id; returns affected row count (0 when the id is unknown).
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<u64, DbErr> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_title_trims() {
        assert_eq!(validate_title("  Milk \n").unwrap(), "Milk");
        assert_eq!(validate_title("eggs").unwrap(), "eggs");
    }

    #[test]
    fn validate_title_rejects_blank() {
        assert!(matches!(validate_title(""), Err(ModelError::Validation(_))));
        assert!(matches!(validate_title(" \t "), Err(ModelError::Validation(_))));
    }
}
