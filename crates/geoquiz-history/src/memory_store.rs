//! Process-local score log.

use std::sync::{Mutex, MutexGuard};

use geoquiz_core::error::DomainError;
use geoquiz_core::history::{GameSummary, ScoreHistoryStore, append_bounded};

/// Keeps the score log in memory for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    history: Mutex<Vec<GameSummary>>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<GameSummary>>, DomainError> {
        self.history
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("history mutex poisoned: {e}")))
    }
}

impl ScoreHistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<Vec<GameSummary>, DomainError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, history: &[GameSummary]) -> Result<(), DomainError> {
        *self.lock()? = history.to_vec();
        Ok(())
    }

    fn append(&self, entry: GameSummary) -> Result<(), DomainError> {
        let mut guard = self.lock()?;
        let current = std::mem::take(&mut *guard);
        *guard = append_bounded(current, entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use chrono::Utc;
    use geoquiz_core::history::HISTORY_LIMIT;

    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(InMemoryHistoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_log() {
        let store = InMemoryHistoryStore::new();
        store.save(&[GameSummary::new(10, 10, 1, Utc::now())]).unwrap();
        store.save(&[GameSummary::new(20, 10, 2, Utc::now())]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].score, 20);
    }

    #[test]
    fn test_append_is_bounded() {
        let store = InMemoryHistoryStore::new();
        for score in 0..12 {
            store.append(GameSummary::new(score, 10, 1, Utc::now())).unwrap();
        }

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), HISTORY_LIMIT);
        assert_eq!(loaded[0].score, 2);
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(InMemoryHistoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|score| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.append(GameSummary::new(score, 10, 1, Utc::now())).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut scores: Vec<u32> = store.load().unwrap().iter().map(|s| s.score).collect();
        scores.sort_unstable();
        assert_eq!(scores, (0..8).collect::<Vec<_>>());
    }
}
