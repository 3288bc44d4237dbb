use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::ShoppingItem;
use super::repository::ShoppingRepository;
use crate::errors::ServiceError;

/// The three list operations, independent of the web framework.
/// Each call is a single store statement; nothing is cached between calls.
#[derive(Clone)]
pub struct ShoppingService {
    repo: Arc<dyn ShoppingRepository>,
}

impl ShoppingService {
    pub fn new(repo: Arc<dyn ShoppingRepository>) -> Self { Self { repo } }

    /// Every item in the store.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ShoppingItem>, ServiceError> {
        let rows = self.repo.list().await?;
        let items = rows
            .into_iter()
            .map(ShoppingItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "shopping_list_fetched");
        Ok(items)
    }

    /// Add one item. The title is trimmed; missing or blank titles are
    /// rejected before the store is called.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::shopping::{repository::memory::InMemoryShoppingRepository, ShoppingService};
    /// let svc = ShoppingService::new(Arc::new(InMemoryShoppingRepository::new()));
    /// let item = tokio_test::block_on(svc.add(Some("  Milk "))).unwrap();
    /// assert_eq!(item.title, "Milk");
    /// assert!(tokio_test::block_on(svc.add(Some("   "))).is_err());
    /// ```
    #[instrument(skip(self, title))]
    pub async fn add(&self, title: Option<&str>) -> Result<ShoppingItem, ServiceError> {
        let title = title.ok_or_else(|| ServiceError::required("title"))?;
        let title = models::shopping::validate_title(title)?;
        let row = self.repo.insert(&title).await?;
        let item = ShoppingItem::try_from(row)?;
        info!(id = item.id, title = %item.title, "shopping_item_added");
        Ok(item)
    }

    /// Delete by id. Succeeds whether or not a row matched.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<i64>) -> Result<(), ServiceError> {
        let id = id.ok_or_else(|| ServiceError::required("id"))?;
        let removed = self.repo.delete(id).await?;
        info!(id, removed, "shopping_item_deleted");
        Ok(())
    }

    /// Whether the store answers.
    pub async fn ping(&self) -> bool {
        match self.repo.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "store ping failed");
                false
            }
        }
    }
}
