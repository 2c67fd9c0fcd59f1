//! Geoquiz Game: the quiz flow.
//!
//! A player picks a continent, then for each question clicks the named
//! country on the map and types its capital. This crate owns the phase
//! machine that sequences those steps, scores answers, notifies observers
//! and records a score log when a game ends.

pub mod application;
pub mod domain;

pub use application::session::GameSession;
pub use application::subscribers::Subscription;
pub use domain::events::{Difficulty, GameEvent};
pub use domain::state::{GamePhase, GameSnapshot, GameState, Transition};
