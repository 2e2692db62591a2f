//! Error types for configuration and play.

use crate::crypto::CryptoError;
use crate::game::SessionState;
use thiserror::Error;

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    /// The configured move list is unusable. Fatal: no round starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A prompt response that is neither a menu ordinal, `0`, nor `?`.
    /// Recoverable: the caller re-prompts.
    #[error("Invalid input. {0}")]
    InvalidInput(String),

    /// The session already resolved or exited and accepts no further moves.
    #[error("session is {0:?} and no longer accepts moves")]
    NotAwaitingMove(SessionState),

    /// The randomness source failed. Fatal: there is no fallback to a
    /// non-cryptographic generator.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
