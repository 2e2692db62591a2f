//! Secure randomness abstraction.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Errors from cryptographic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The randomness source could not produce bytes. A predictable key or
    /// selector would void the commitment, so this aborts the session.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Source of cryptographically secure random bytes.
///
/// Implementations can be:
/// - [`OsEntropy`] for production (platform CSPRNG)
/// - [`ScriptedEntropy`] for deterministic tests
pub trait SecureRandom {
    /// Fill `dest` entirely with random bytes, or fail without producing any.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// Entropy source backed by the operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl SecureRandom for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))
    }
}

/// Entropy source that replays a fixed byte script, for tests
pub struct ScriptedEntropy {
    bytes: Vec<u8>,
    cursor: usize,
}

impl ScriptedEntropy {
    /// Create a source that hands out `bytes` in order and fails once exhausted
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }
}

impl SecureRandom for ScriptedEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        if self.remaining() < dest.len() {
            return Err(CryptoError::EntropyUnavailable(format!(
                "script exhausted: {} bytes left, {} requested",
                self.remaining(),
                dest.len()
            )));
        }
        dest.copy_from_slice(&self.bytes[self.cursor..self.cursor + dest.len()]);
        self.cursor += dest.len();
        Ok(())
    }
}
