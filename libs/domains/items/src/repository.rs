use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemData};

/// Repository trait for Item persistence
///
/// The handlers only ever reach storage through this trait. Whether an
/// `update` or `delete` of a missing id is an error is the implementation's
/// call; the in-memory store treats it as a no-op.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items in storage order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Store a new item and return it with its assigned id
    async fn create(&self, data: ItemData) -> ItemResult<Item>;

    /// Replace the writable fields of an item. Returns whether it existed.
    async fn update(&self, id: i64, data: ItemData) -> ItemResult<bool>;

    /// Delete an item by ID. Returns whether it existed.
    async fn delete(&self, id: i64) -> ItemResult<bool>;

    /// Delete every item. Returns how many were removed.
    async fn delete_all(&self) -> ItemResult<u64>;

    /// Cheap connectivity check used by readiness probes
    async fn ping(&self) -> ItemResult<()> {
        Ok(())
    }
}
