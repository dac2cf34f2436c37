//! Items Domain
//!
//! CRUD over a single `Item` resource. Every item handed to a client carries
//! an absolute `url` pointing back at its own fetch-by-id endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, URL shaping, read-after-write
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemData, ItemResponse
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_items::{InMemoryItemRepository, ItemService, handlers};
//!
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository, "http://localhost:8080/api/items");
//!
//! // Mount this at /api/items so the URLs above resolve
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{Item, ItemData, ItemResponse, item_url};
pub use repository::ItemRepository;
pub use service::ItemService;
