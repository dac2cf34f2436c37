//! Items API routes
//!
//! Wires the items domain to HTTP routes under `/api/items`.

use axum::Router;
use core_config::server::ServerConfig;
use domain_items::{ItemRepository, handlers};

use super::API_PREFIX;
use crate::state::AppState;

/// Path the items router is nested at, relative to `/api`
pub const ITEMS_PATH: &str = "/items";

/// Absolute URL the items routes are reachable at: public origin + mount path.
pub fn base_route_url(server: &ServerConfig) -> String {
    format!("{}{}{}", server.public_uri(), API_PREFIX, ITEMS_PATH)
}

/// Create items router
pub fn router<R: ItemRepository + 'static>(state: &AppState<R>) -> Router {
    handlers::router(state.items.clone())
}
