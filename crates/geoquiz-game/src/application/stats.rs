//! Score log bookkeeping.
//!
//! Storage is best-effort: a store that cannot be read reads as an empty
//! log, and a failed write is logged and dropped.

use chrono::{DateTime, Utc};
use geoquiz_core::history::{GameSummary, ScoreHistoryStore};
use tracing::warn;

use crate::domain::state::GameState;

/// Loads the score log, treating any failure as "no history".
pub fn load_history(store: &dyn ScoreHistoryStore) -> Vec<GameSummary> {
    store.load().unwrap_or_else(|e| {
        warn!(error = %e, "could not load score history");
        Vec::new()
    })
}

/// Appends `summary` to the stored log.
///
/// The store appends atomically. Nothing is written if the existing log
/// cannot be read, so a transient read failure never wipes earlier scores.
pub fn record_game(store: &dyn ScoreHistoryStore, summary: GameSummary) {
    if let Err(e) = store.append(summary) {
        warn!(error = %e, "could not record game in score history");
    }
}

/// Summary of a finished game as it goes into the log.
#[must_use]
pub fn summarize(state: &GameState, timestamp: DateTime<Utc>) -> GameSummary {
    let completed = u32::try_from(state.used_countries.len()).unwrap_or(u32::MAX);
    GameSummary::new(state.score, state.total_questions, completed, timestamp)
}

/// Highest score in `history`, or 0.
#[must_use]
pub fn best_score(history: &[GameSummary]) -> u32 {
    history.iter().map(|s| s.score).max().unwrap_or(0)
}

/// Mean accuracy across `history`, or 0.
#[must_use]
pub fn average_accuracy(history: &[GameSummary]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: f64 = history.iter().map(|s| s.accuracy).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = history.len() as f64;
    total / count
}
