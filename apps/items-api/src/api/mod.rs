//! API routes module
//!
//! Routes defined here are nested under `/api` by `axum_helpers::create_router`.

pub mod health;
pub mod items;

use axum::Router;
use domain_items::ItemRepository;

use crate::state::AppState;

/// Prefix `create_router` mounts every API route under
pub const API_PREFIX: &str = "/api";

/// Create all API routes
pub fn routes<R: ItemRepository + 'static>(state: &AppState<R>) -> Router {
    Router::new()
        .nest(items::ITEMS_PATH, items::router(state))
        .merge(health::router(state.clone()))
}
