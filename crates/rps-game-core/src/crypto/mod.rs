//! Cryptographic primitives for the commit-reveal protocol.
//!
//! This module provides:
//! - CommitKey and MoveCommitment for the keyed commitment scheme
//! - Reveal for the post-round disclosure
//! - SecureRandom abstraction over the platform CSPRNG

mod commitment;
mod rng;

pub use commitment::{CommitKey, MoveCommitment, Reveal};
pub use rng::{CryptoError, OsEntropy, ScriptedEntropy, SecureRandom};
