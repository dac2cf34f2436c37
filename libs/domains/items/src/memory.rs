//! In-process implementation of ItemRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemData};
use crate::repository::ItemRepository;

#[derive(Debug)]
struct Store {
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

/// Item repository held in memory.
///
/// Items are kept ordered by id, so `list` returns them in creation order.
/// Ids start at 1 and are never reused, including after `delete_all`.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    store: RwLock<Store>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    #[instrument(skip(self, data), fields(item_name = %data.name))]
    async fn create(&self, data: ItemData) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let item = Item::new(id, data);
        store.items.insert(id, item.clone());

        tracing::info!(item_id = id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self, data))]
    async fn update(&self, id: i64, data: ItemData) -> ItemResult<bool> {
        let mut store = self.store.write().await;
        match store.items.get_mut(&id) {
            Some(item) => {
                item.replace(data);
                tracing::info!(item_id = id, "Item updated successfully");
                Ok(true)
            }
            None => {
                tracing::debug!(item_id = id, "Update matched no item");
                Ok(false)
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.items.remove(&id).is_some();

        if removed {
            tracing::info!(item_id = id, "Item deleted successfully");
        } else {
            tracing::debug!(item_id = id, "Delete matched no item");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ItemResult<u64> {
        let mut store = self.store.write().await;
        let count = store.items.len() as u64;
        store.items.clear();

        tracing::info!(deleted = count, "All items deleted");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryItemRepository::new();
        let first = repo.create(ItemData::new("a")).await.unwrap();
        let second = repo.create(ItemData::new("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryItemRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(ItemData::new(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryItemRepository::new();
        let item = repo
            .create(ItemData::new("old").with_description("desc"))
            .await
            .unwrap();

        assert!(repo.update(item.id, ItemData::new("new")).await.unwrap());

        let stored = repo.get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "new");
        assert_eq!(stored.description, None);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_noops() {
        let repo = InMemoryItemRepository::new();
        assert!(!repo.update(99, ItemData::new("ghost")).await.unwrap());
        assert!(!repo.delete(99).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(ItemData::new("a")).await.unwrap();

        assert!(repo.delete(item.id).await.unwrap());
        assert_eq!(repo.get_by_id(item.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_all_keeps_id_sequence() {
        let repo = InMemoryItemRepository::new();
        repo.create(ItemData::new("a")).await.unwrap();
        repo.create(ItemData::new("b")).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.list().await.unwrap().is_empty());

        let next = repo.create(ItemData::new("c")).await.unwrap();
        assert_eq!(next.id, 3);
    }
}
