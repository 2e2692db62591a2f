//! RPS Game Core Library
//!
//! This crate provides the move set, outcome derivation, and commit-reveal
//! primitives for a generalized N-move rock-paper-scissors game against a
//! computer opponent whose move is provably fixed before the human's.

pub mod crypto;
pub mod error;
pub mod game;

pub use crypto::{
    CommitKey, CryptoError, MoveCommitment, OsEntropy, Reveal, ScriptedEntropy, SecureRandom,
};
pub use error::GameError;
pub use game::{
    GameSession, MoveSet, Outcome, OutcomeTable, PlayerInput, RoundResult, SessionId, SessionState,
};
