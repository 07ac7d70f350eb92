//! Key rotation.
//!
//! During a rotation window `DOTENV_KEY` may hold both the retiring and the
//! replacement key. Candidates are tried in order and the first one that
//! decrypts wins.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::error::VaultError;

/// A key paired with the ciphertext it addresses.
#[derive(Clone, Copy)]
pub struct Candidate<'a> {
    pub key: &'a str,
    pub ciphertext: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(key: &'a str, ciphertext: &'a str) -> Self {
        Self { key, ciphertext }
    }
}

impl std::fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("key", &"<redacted>")
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Decrypt with the first candidate that works.
///
/// Stops at the first success. Individual failure reasons are discarded, so
/// callers cannot tell a stale key from a tampered ciphertext.
///
/// # Errors
///
/// Returns `VaultError::InvalidKey` if no candidate decrypts.
pub fn rotate(candidates: &[Candidate<'_>]) -> Result<Zeroizing<Vec<u8>>, VaultError> {
    debug!(candidates = candidates.len(), "attempting decryption");

    candidates
        .iter()
        .find_map(|c| cipher::decrypt(c.ciphertext, c.key).ok())
        .ok_or(VaultError::InvalidKey)
}
