//! HTTP routes.

pub mod continents;
pub mod countries;
pub mod games;
pub mod health;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/continents", continents::router())
        .nest("/api/v1/countries", countries::router())
        .nest("/api/v1/games", games::router())
        .nest("/api/v1/stats", stats::router())
        .with_state(state)
}
