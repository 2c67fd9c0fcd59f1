//! Continent listing for the start screen.

use axum::{Json, Router, routing::get};
use geoquiz_atlas::lookup::{continents, countries_for_continent};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// One selectable continent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentView {
    /// Key to send back when selecting.
    pub key: &'static str,
    /// Name shown to the player.
    pub display_name: &'static str,
    /// Number of countries that can be asked.
    pub pool_size: usize,
}

/// GET /
#[instrument]
async fn list_continents() -> Json<Vec<ContinentView>> {
    let views = continents()
        .iter()
        .map(|continent| ContinentView {
            key: continent.key,
            display_name: continent.display_name,
            pool_size: countries_for_continent(continent.key).map_or(0, |pool| pool.len()),
        })
        .collect();
    Json(views)
}

/// Returns the router for continent listings.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_continents))
}
