//! Items API application
//!
//! Composes configuration, the items domain and the shared server helpers
//! into one router. `main.rs` only adds tracing and the listener.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::create_router;
use domain_items::ItemRepository;

pub use config::Config;
pub use state::AppState;

/// Build the full application router: docs, `/api/*` routes and `/health`.
pub async fn build_app<R: ItemRepository + 'static>(
    state: &AppState<R>,
) -> std::io::Result<Router> {
    create_router::<openapi::ApiDoc>(api::routes(state), state.config.app).await
}
