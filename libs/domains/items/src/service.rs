//! Item Service - validation, URL shaping and read-after-write

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{ItemData, ItemResponse};
use crate::repository::ItemRepository;

/// Item service sitting between the HTTP handlers and the repository.
///
/// Holds the base route URL (public origin + mount prefix) so every item it
/// hands out carries an absolute `url` back to its fetch endpoint.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    base_url: Arc<str>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService.
    ///
    /// `base_url` is the absolute URL the items router is mounted at, e.g.
    /// `https://api.example.com/api/items`.
    pub fn new(repository: R, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            repository: Arc::new(repository),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<ItemResponse>> {
        let items = self.repository.list().await?;
        Ok(items
            .into_iter()
            .map(|item| ItemResponse::from_item(item, &self.base_url))
            .collect())
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<ItemResponse> {
        self.repository
            .get_by_id(id)
            .await?
            .map(|item| ItemResponse::from_item(item, &self.base_url))
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item.
    ///
    /// The response is re-read through [`Self::get_item`] so it is exactly
    /// what a later fetch of the same id returns.
    #[instrument(skip(self, data), fields(item_name = %data.name))]
    pub async fn create_item(&self, data: ItemData) -> ItemResult<ItemResponse> {
        data.validate()?;

        let created = self.repository.create(data).await?;
        self.get_item(created.id).await
    }

    /// Replace an existing item
    #[instrument(skip(self, data))]
    pub async fn update_item(&self, id: i64, data: ItemData) -> ItemResult<()> {
        data.validate()?;

        self.repository.update(id, data).await?;
        Ok(())
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Delete every item
    #[instrument(skip(self))]
    pub async fn delete_all_items(&self) -> ItemResult<()> {
        self.repository.delete_all().await?;
        Ok(())
    }

    /// Check that the repository is reachable
    pub async fn ping(&self) -> ItemResult<()> {
        self.repository.ping().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            base_url: Arc::clone(&self.base_url),
        }
    }
}
