//! Score log endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use geoquiz_core::history::GameSummary;
use geoquiz_game::application::stats::{average_accuracy, best_score, load_history};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Aggregate view of past games.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Highest score in the log.
    pub best_score: u32,
    /// Mean accuracy across the log.
    pub average_accuracy: f64,
    /// Logged games, oldest first.
    pub history: Vec<GameSummary>,
}

/// GET /
#[instrument(skip(state))]
async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let history = load_history(state.history.as_ref());
    Json(StatsResponse {
        best_score: best_score(&history),
        average_accuracy: average_accuracy(&history),
        history,
    })
}

/// Returns the router for score statistics.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}
