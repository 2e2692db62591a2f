//! Commitment key, MAC, and reveal for the commit-reveal scheme.

use super::rng::{CryptoError, SecureRandom};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Single-use 256-bit key binding the computer's move selector.
///
/// Generated fresh per session and disclosed only after the human's move is
/// locked in.
#[derive(Clone, Serialize, Deserialize)]
pub struct CommitKey([u8; 32]);

impl CommitKey {
    /// Draw a fresh key from the given entropy source
    pub fn generate(rng: &mut dyn SecureRandom) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitKey({}..)", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for CommitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// MAC over the raw selector byte: HMAC-SHA-256(key, [selector]).
///
/// Shown to the human before the menu; proves the computer's move was fixed
/// before any input was read.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommitment([u8; 32]);

impl MoveCommitment {
    /// Commit to a selector byte under `key`
    pub fn new(selector: u8, key: &CommitKey) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(&[selector]);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that `selector` and `key` reproduce this MAC (constant-time)
    pub fn verify(&self, selector: u8, key: &CommitKey) -> bool {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(&[selector]);
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for MoveCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveCommitment({}..)", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for MoveCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// Post-round disclosure: the selector byte and the key it was committed under.
///
/// Anyone holding the pre-round [`MoveCommitment`] can recompute the MAC from
/// this and detect a swapped move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    /// Raw random byte the computer's ordinal was reduced from
    pub selector: u8,
    /// Key the selector was committed under
    pub key: CommitKey,
}

impl Reveal {
    /// Auditor-side check: does this reveal reproduce the pre-round MAC?
    pub fn verify(&self, commitment: &MoveCommitment) -> bool {
        commitment.verify(self.selector, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::super::rng::OsEntropy;
    use super::*;

    #[test]
    fn test_commitment_round_trip() {
        let mut rng = OsEntropy;
        let key = CommitKey::generate(&mut rng).unwrap();
        let commitment = MoveCommitment::new(42, &key);

        assert!(commitment.verify(42, &key));
    }

    #[test]
    fn test_reveal_verifies_against_commitment() {
        let mut rng = OsEntropy;
        let key = CommitKey::generate(&mut rng).unwrap();
        let commitment = MoveCommitment::new(7, &key);

        let reveal = Reveal { selector: 7, key };
        assert!(reveal.verify(&commitment));
    }

    #[test]
    fn test_wrong_selector_fails_verification() {
        let key = CommitKey::from_bytes([3u8; 32]);
        let commitment = MoveCommitment::new(1, &key);

        assert!(!commitment.verify(2, &key));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = CommitKey::from_bytes([1u8; 32]);
        let key2 = CommitKey::from_bytes([2u8; 32]);
        let commitment = MoveCommitment::new(9, &key1);

        assert!(!commitment.verify(9, &key2));
    }

    #[test]
    fn test_different_keys_different_macs() {
        let commitment1 = MoveCommitment::new(5, &CommitKey::from_bytes([1u8; 32]));
        let commitment2 = MoveCommitment::new(5, &CommitKey::from_bytes([2u8; 32]));

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_selectors_different_macs() {
        let key = CommitKey::from_bytes([8u8; 32]);

        assert_ne!(MoveCommitment::new(0, &key), MoveCommitment::new(255, &key));
    }

    #[test]
    fn test_generated_keys_are_distinct() {
        let mut rng = OsEntropy;
        let key1 = CommitKey::generate(&mut rng).unwrap();
        let key2 = CommitKey::generate(&mut rng).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        let key = CommitKey::from_bytes([0xAB; 32]);
        let commitment = MoveCommitment::new(0, &key);

        let key_hex = key.to_string();
        let mac_hex = commitment.to_string();
        assert_eq!(key_hex.len(), 64);
        assert_eq!(mac_hex.len(), 64);
        assert_eq!(key_hex, "AB".repeat(32));
        assert!(mac_hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
