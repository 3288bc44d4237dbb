use async_trait::async_trait;
use models::shopping::Model;

use crate::errors::ServiceError;

/// Storage abstraction for the `shopping` table. Returns raw rows; turning
/// them into `ShoppingItem` is the service's job.
#[async_trait]
pub trait ShoppingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    /// Insert and return the stored row.
    async fn insert(&self, title: &str) -> Result<Model, ServiceError>;
    /// Number of rows removed; 0 for an unknown id.
    async fn delete(&self, id: i64) -> Result<u64, ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// In-memory repository for tests, benches and running without a database.
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::RwLock;

    pub struct InMemoryShoppingRepository {
        rows: RwLock<BTreeMap<i64, Model>>, // key: id
        next_id: AtomicI64,
    }

    impl InMemoryShoppingRepository {
        pub fn new() -> Self {
            Self { rows: RwLock::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
        }

        /// Start from existing rows, stored as given (no validation).
        pub fn with_rows(rows: impl IntoIterator<Item = Model>) -> Self {
            let rows: BTreeMap<i64, Model> = rows.into_iter().map(|m| (m.id, m)).collect();
            let next = rows.keys().next_back().map_or(1, |max| max + 1);
            Self { rows: RwLock::new(rows), next_id: AtomicI64::new(next) }
        }

        pub async fn len(&self) -> usize {
            self.rows.read().await.len()
        }
    }

    impl Default for InMemoryShoppingRepository {
        fn default() -> Self { Self::new() }
    }

    #[async_trait]
    impl ShoppingRepository for InMemoryShoppingRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.values().cloned().collect())
        }

        async fn insert(&self, title: &str) -> Result<Model, ServiceError> {
            // mirrors the table's CHECK constraint
            let title = models::shopping::validate_title(title)?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let row = Model { id, title, created_at: Utc::now().into() };
            self.rows.write().await.insert(id, row.clone());
            Ok(row)
        }

        async fn delete(&self, id: i64) -> Result<u64, ServiceError> {
            let removed = self.rows.write().await.remove(&id).is_some();
            Ok(u64::from(removed))
        }

        async fn ping(&self) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn ids_increase_and_rows_list_in_id_order() -> Result<(), ServiceError> {
            let repo = InMemoryShoppingRepository::new();
            let a = repo.insert("a").await?;
            let b = repo.insert("b").await?;
            assert_eq!((a.id, b.id), (1, 2));
            let titles: Vec<_> = repo.list().await?.into_iter().map(|m| m.title).collect();
            assert_eq!(titles, vec!["a", "b"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_reports_affected_rows() -> Result<(), ServiceError> {
            let repo = InMemoryShoppingRepository::new();
            let a = repo.insert("a").await?;
            assert_eq!(repo.delete(a.id).await?, 1);
            assert_eq!(repo.delete(a.id).await?, 0);
            assert_eq!(repo.len().await, 0);
            Ok(())
        }

        #[tokio::test]
        async fn seeded_rows_continue_the_id_sequence() -> Result<(), ServiceError> {
            let seed = Model { id: 41, title: "seed".into(), created_at: Utc::now().into() };
            let repo = InMemoryShoppingRepository::with_rows([seed]);
            assert_eq!(repo.insert("next").await?.id, 42);
            Ok(())
        }
    }
}
