//! A single player's game.
//!
//! `GameSession` owns the [`GameState`] and is the only thing that mutates
//! it. Each dispatch runs to completion, then observers receive one snapshot
//! of the result. Dispatching from inside an observer is not supported.

use std::fmt;
use std::sync::Arc;

use geoquiz_answers::mask_capital;
use geoquiz_core::clock::Clock;
use geoquiz_core::history::{GameSummary, ScoreHistoryStore};
use geoquiz_core::rng::DeterministicRng;
use tracing::debug;

use super::stats;
use super::subscribers::{Listener, SubscriberRegistry, Subscription};
use crate::domain::events::GameEvent;
use crate::domain::state::{GamePhase, GameSnapshot, GameState, Transition};

/// Game length used when none is given.
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 10;

/// A game plus its observers and collaborators.
pub struct GameSession {
    state: GameState,
    subscribers: SubscriberRegistry,
    clock: Arc<dyn Clock>,
    rng: Box<dyn DeterministicRng>,
    history: Arc<dyn ScoreHistoryStore>,
    revision: u64,
}

impl GameSession {
    /// Creates a session waiting for a continent choice.
    #[must_use]
    pub fn new(
        total_questions: u32,
        clock: Arc<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
        history: Arc<dyn ScoreHistoryStore>,
    ) -> Self {
        Self {
            state: GameState::new(total_questions),
            subscribers: SubscriberRegistry::new(),
            clock,
            rng,
            history,
            revision: 0,
        }
    }

    /// Applies `event`.
    ///
    /// Observers are notified exactly once if the state changed and not at
    /// all otherwise. Reaching game over appends the game to the score log.
    pub fn dispatch(&mut self, event: GameEvent) -> Transition {
        debug!(event_type = event.event_type(), "dispatching game event");
        let transition = self.state.apply(&event, self.rng.as_mut());

        if transition == Transition::Finished {
            let summary = stats::summarize(&self.state, self.clock.now());
            stats::record_game(self.history.as_ref(), summary);
        }
        if transition.is_change() {
            self.revision += 1;
            let snapshot = self.get_state();
            self.subscribers.notify(&snapshot);
        }
        transition
    }

    /// Registers an observer called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GameSnapshot) + Send + 'static,
    {
        let listener: Listener = Box::new(listener);
        self.subscribers.subscribe(listener)
    }

    /// Removes an observer. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.subscribers.unsubscribe(handle)
    }

    /// Number of state changes so far. Ignored events leave it unchanged.
    ///
    /// A caller that schedules work against the current state can compare
    /// revisions later to tell whether anything happened in between.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copy of the current state.
    #[must_use]
    pub fn get_state(&self) -> GameSnapshot {
        Arc::new(self.state.clone())
    }

    /// Masked capital of the current country while a capital is awaited.
    #[must_use]
    pub fn get_hint(&self) -> Option<String> {
        if self.state.phase != GamePhase::GuessCapital {
            return None;
        }
        let capital = self.state.current_country?.primary_capital()?;
        Some(mask_capital(capital))
    }

    /// First capital of the current country, or an empty string.
    #[must_use]
    pub fn get_correct_answer(&self) -> String {
        self.state
            .current_country
            .and_then(|country| country.primary_capital())
            .unwrap_or_default()
            .to_owned()
    }

    /// Past games, oldest first. Empty if the log cannot be read.
    #[must_use]
    pub fn get_game_stats(&self) -> Vec<GameSummary> {
        stats::load_history(self.history.as_ref())
    }

    /// Best score in the log, or 0.
    #[must_use]
    pub fn get_best_score(&self) -> u32 {
        stats::best_score(&self.get_game_stats())
    }

    /// Mean accuracy across the log, or 0.
    #[must_use]
    pub fn get_average_accuracy(&self) -> f64 {
        stats::average_accuracy(&self.get_game_stats())
    }

    /// Completion percentage of the current game.
    #[must_use]
    pub fn get_progress(&self) -> f64 {
        self.state.progress()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
