//! Application state management.

use domain_items::{InMemoryItemRepository, ItemRepository, ItemService};

/// Shared application state.
///
/// Cloning is cheap: the item service shares its repository through an `Arc`.
pub struct AppState<R: ItemRepository = InMemoryItemRepository> {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Item service; the binary backs it with the in-process repository
    pub items: ItemService<R>,
}

impl AppState {
    /// Build the state around a fresh in-memory repository.
    pub fn new(config: crate::config::Config) -> Self {
        Self::with_repository(config, InMemoryItemRepository::new())
    }
}

impl<R: ItemRepository> AppState<R> {
    /// Build the state, deriving the items base URL from the server config.
    pub fn with_repository(config: crate::config::Config, repository: R) -> Self {
        let base_url = crate::api::items::base_route_url(&config.server);
        Self {
            items: ItemService::new(repository, base_url),
            config,
        }
    }
}

impl<R: ItemRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            items: self.items.clone(),
        }
    }
}
