//! Score log abstractions.
//!
//! At game over the engine appends one [`GameSummary`] to a bounded log kept
//! in durable key-value storage. The storage itself lives behind
//! [`ScoreHistoryStore`] so the game never depends on a concrete backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Storage key under which the score log is kept.
pub const HISTORY_KEY: &str = "geographyGameStats";

/// Maximum number of summaries retained in the log.
pub const HISTORY_LIMIT: usize = 10;

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Final score.
    pub score: u32,
    /// Number of questions the game was configured for.
    pub total_questions: u32,
    /// Approximate count of correct answers (questions completed).
    pub correct_answers: u32,
    /// Score as a percentage of ten points per question.
    pub accuracy: f64,
    /// When the game ended.
    pub timestamp: DateTime<Utc>,
}

impl GameSummary {
    /// Builds a summary, deriving `accuracy` from the score.
    #[must_use]
    pub fn new(
        score: u32,
        total_questions: u32,
        correct_answers: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let accuracy = if total_questions == 0 {
            0.0
        } else {
            f64::from(score) / (f64::from(total_questions) * 10.0) * 100.0
        };
        Self {
            score,
            total_questions,
            correct_answers,
            accuracy,
            timestamp,
        }
    }
}

/// Appends `entry` and drops the oldest entries beyond [`HISTORY_LIMIT`].
#[must_use]
pub fn append_bounded(mut history: Vec<GameSummary>, entry: GameSummary) -> Vec<GameSummary> {
    history.push(entry);
    if history.len() > HISTORY_LIMIT {
        let excess = history.len() - HISTORY_LIMIT;
        history.drain(..excess);
    }
    history
}

/// Durable storage for the score log.
pub trait ScoreHistoryStore: Send + Sync {
    /// Load the stored log, oldest first. A missing log is an empty one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` or `DomainError::Serialization` when the
    /// backing store cannot be read or decoded.
    fn load(&self) -> Result<Vec<GameSummary>, DomainError>;

    /// Replace the stored log.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` or `DomainError::Serialization` when the
    /// log cannot be encoded or written.
    fn save(&self, history: &[GameSummary]) -> Result<(), DomainError>;

    /// Append one summary, keeping at most [`HISTORY_LIMIT`] entries.
    ///
    /// The read and the write happen under one lock, so concurrent appends
    /// from different games are all kept. Nothing is written if the stored
    /// log cannot be read.
    ///
    /// # Errors
    ///
    /// Returns the error of the failing load or save, or
    /// `DomainError::Infrastructure` if the store's lock is poisoned.
    fn append(&self, entry: GameSummary) -> Result<(), DomainError>;
}
