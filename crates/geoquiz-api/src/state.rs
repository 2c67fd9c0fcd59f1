//! Shared application state.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::time::Instant;

use geoquiz_core::clock::{Clock, SystemClock};
use geoquiz_core::error::DomainError;
use geoquiz_core::history::ScoreHistoryStore;
use geoquiz_core::rng::{DeterministicRng, SystemRng};
use geoquiz_game::GameSession;
use tracing::info;
use uuid::Uuid;

use crate::config::{FeedbackTiming, SessionLimits};

/// Builds the RNG handed to each new game.
pub type RngFactory = Arc<dyn Fn() -> Box<dyn DeterministicRng> + Send + Sync>;

/// A hosted game, locked only for the duration of one dispatch.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// A game session plus what the server knows about how it was created.
#[derive(Debug, Clone)]
pub struct HostedGame {
    /// The session itself.
    pub session: SharedSession,
    /// Per-question time limit of the chosen difficulty, if one was chosen.
    pub time_limit_secs: Option<u32>,
}

impl HostedGame {
    /// Locks the session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a previous holder panicked.
    pub fn lock(&self) -> Result<MutexGuard<'_, GameSession>, DomainError> {
        self.session
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("game session poisoned: {e}")))
    }

    /// Whether the game is over. A session locked elsewhere is in use and
    /// counts as running; a poisoned one counts as over.
    fn is_finished(&self) -> bool {
        match self.session.try_lock() {
            Ok(session) => session.is_game_over(),
            Err(TryLockError::WouldBlock) => false,
            Err(TryLockError::Poisoned(_)) => true,
        }
    }
}

#[derive(Debug)]
struct Entry {
    game: HostedGame,
    touched: Instant,
}

/// Live game sessions keyed by id.
///
/// Every lookup refreshes a game's last-touched time. Games left alone past
/// [`SessionLimits`] are dropped whenever a new game is registered.
#[derive(Debug, Default)]
pub struct GameRegistry {
    sessions: Mutex<HashMap<Uuid, Entry>>,
    limits: SessionLimits,
}

impl GameRegistry {
    /// An empty registry with the given expiry.
    #[must_use]
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: Mutex::default(),
            limits,
        }
    }

    /// Stores `session` under a fresh id, after dropping expired games.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn insert(
        &self,
        session: GameSession,
        time_limit_secs: Option<u32>,
    ) -> Result<Uuid, DomainError> {
        let now = Instant::now();
        let mut sessions = self.lock()?;
        self.expire(&mut sessions, now);

        let game_id = Uuid::new_v4();
        let game = HostedGame {
            session: Arc::new(Mutex::new(session)),
            time_limit_secs,
        };
        sessions.insert(game_id, Entry { game, touched: now });
        Ok(game_id)
    }

    /// Looks up a game and marks it as touched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownGame` if no game has this id.
    pub fn get(&self, game_id: Uuid) -> Result<HostedGame, DomainError> {
        let mut sessions = self.lock()?;
        let entry = sessions
            .get_mut(&game_id)
            .ok_or(DomainError::UnknownGame(game_id))?;
        entry.touched = Instant::now();
        Ok(entry.game.clone())
    }

    /// Drops a game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownGame` if no game has this id.
    pub fn remove(&self, game_id: Uuid) -> Result<(), DomainError> {
        self.lock()?
            .remove(&game_id)
            .map(|_| ())
            .ok_or(DomainError::UnknownGame(game_id))
    }

    /// Number of live games.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.len())
    }

    /// Drops every game that has expired as of `now`, returning how many.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn sweep(&self, now: Instant) -> Result<usize, DomainError> {
        let mut sessions = self.lock()?;
        Ok(self.expire(&mut sessions, now))
    }

    fn expire(&self, sessions: &mut HashMap<Uuid, Entry>, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| {
            let idle = now.saturating_duration_since(entry.touched);
            idle < self.limits.finished_ttl
                || (idle < self.limits.idle_ttl && !entry.game.is_finished())
        });

        let dropped = before - sessions.len();
        if dropped > 0 {
            info!(dropped, live = sessions.len(), "expired idle games");
        }
        dropped
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Entry>>, DomainError> {
        self.sessions
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("game registry poisoned: {e}")))
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live games.
    pub games: Arc<GameRegistry>,
    /// Clock for score log timestamps.
    pub clock: Arc<dyn Clock>,
    /// RNG source for new games.
    pub rng_factory: RngFactory,
    /// Score log shared by every game.
    pub history: Arc<dyn ScoreHistoryStore>,
    /// Feedback auto-advance settings.
    pub timing: FeedbackTiming,
}

impl AppState {
    /// Create new application state with default game expiry.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng_factory: RngFactory,
        history: Arc<dyn ScoreHistoryStore>,
        timing: FeedbackTiming,
    ) -> Self {
        Self {
            games: Arc::new(GameRegistry::default()),
            clock,
            rng_factory,
            history,
            timing,
        }
    }

    /// State backed by the system clock and an OS-seeded RNG per game.
    #[must_use]
    pub fn production(history: Arc<dyn ScoreHistoryStore>, timing: FeedbackTiming) -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(|| Box::new(SystemRng::from_os()) as Box<dyn DeterministicRng>),
            history,
            timing,
        )
    }

    /// Replaces the game registry with an empty one using `limits`.
    #[must_use]
    pub fn with_session_limits(mut self, limits: SessionLimits) -> Self {
        self.games = Arc::new(GameRegistry::new(limits));
        self
    }

    /// A new game session wired to this state's collaborators.
    #[must_use]
    pub fn new_session(&self, total_questions: u32) -> GameSession {
        GameSession::new(
            total_questions,
            Arc::clone(&self.clock),
            (self.rng_factory)(),
            Arc::clone(&self.history),
        )
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("games", &self.games)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}
