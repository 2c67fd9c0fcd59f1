//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised at the edges of the quiz engine.
///
/// The state machine never returns these; they surface from persistence
/// adapters and from the HTTP layer that hosts game sessions.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No hosted game session has this identifier.
    #[error("game not found: {0}")]
    UnknownGame(Uuid),

    /// Caller-supplied input was rejected before reaching the game.
    #[error("validation error: {0}")]
    Validation(String),

    /// The durable key-value store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other infrastructure failure (poisoned locks, runtime errors).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
