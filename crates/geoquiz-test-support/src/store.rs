//! Test stores: mock `ScoreHistoryStore` implementations for tests.

use std::sync::Mutex;

use geoquiz_core::error::DomainError;
use geoquiz_core::history::{GameSummary, ScoreHistoryStore, append_bounded};

/// A store that keeps the log in memory and records every log it writes,
/// through `save` or `append`.
#[derive(Debug, Default)]
pub struct RecordingHistoryStore {
    current: Mutex<Vec<GameSummary>>,
    saves: Mutex<Vec<Vec<GameSummary>>>,
}

impl RecordingHistoryStore {
    /// Create a store preloaded with `history`.
    #[must_use]
    pub fn with_history(history: Vec<GameSummary>) -> Self {
        Self {
            current: Mutex::new(history),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// Returns every log passed to `save`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved(&self) -> Vec<Vec<GameSummary>> {
        self.saves.lock().unwrap().clone()
    }
}

impl ScoreHistoryStore for RecordingHistoryStore {
    fn load(&self) -> Result<Vec<GameSummary>, DomainError> {
        Ok(self.current.lock().unwrap().clone())
    }

    fn save(&self, history: &[GameSummary]) -> Result<(), DomainError> {
        *self.current.lock().unwrap() = history.to_vec();
        self.saves.lock().unwrap().push(history.to_vec());
        Ok(())
    }

    fn append(&self, entry: GameSummary) -> Result<(), DomainError> {
        let mut current = self.current.lock().unwrap();
        let updated = append_bounded(current.clone(), entry);
        self.saves.lock().unwrap().push(updated.clone());
        *current = updated;
        Ok(())
    }
}

/// A store whose every operation fails. Useful for checking that storage
/// errors never reach the player.
#[derive(Debug, Default)]
pub struct FailingHistoryStore;

impl ScoreHistoryStore for FailingHistoryStore {
    fn load(&self) -> Result<Vec<GameSummary>, DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }

    fn save(&self, _history: &[GameSummary]) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }

    fn append(&self, _entry: GameSummary) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }
}
