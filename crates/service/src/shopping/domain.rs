use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A list entry as handed to callers. Built only from store rows that
/// satisfy the invariants (non-empty title).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
}

impl TryFrom<models::shopping::Model> for ShoppingItem {
    type Error = ServiceError;

    fn try_from(row: models::shopping::Model) -> Result<Self, Self::Error> {
        if row.title.trim().is_empty() {
            return Err(ServiceError::Malformed(format!("row {} has an empty title", row.id)));
        }
        Ok(Self { id: row.id, title: row.title, created_at: row.created_at })
    }
}
