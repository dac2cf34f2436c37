//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use domain_items::ItemRepository;

use crate::state::AppState;

/// Create the readiness router
pub fn router<R: ItemRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/ready", get(readiness_check::<R>))
        .with_state(state)
}

/// Readiness check - verifies the item repository answers
async fn readiness_check<R: ItemRepository>(
    State(state): State<AppState<R>>,
) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "repository",
        Box::pin(async { state.items.ping().await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}
