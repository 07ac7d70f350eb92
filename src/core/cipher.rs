//! Vault decryption.
//!
//! Each vault field holds `base64(nonce || ciphertext || tag)` sealed with
//! AES-GCM under the hex key carried by a `DOTENV_KEY` URL. The key is
//! prefixed with a four character tag (`key_`) that is not part of the key
//! material.

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::Aes256Gcm;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_TAG_LEN, MIN_KEY_HEX_LEN, NONCE_LEN};
use crate::error::CipherError;

/// Decrypt a base64 vault field with a tagged hex key.
///
/// # Arguments
///
/// * `ciphertext` - Base64 encoded `nonce || ciphertext || tag`
/// * `key` - Tagged key material, e.g. `key_0dec82be...`
///
/// # Returns
///
/// The exact plaintext bytes, wiped on drop.
///
/// # Errors
///
/// - `CipherError::InvalidKeyLength` if the key is shorter than the tag plus
///   64 hex characters
/// - `CipherError::InvalidHex` / `CipherError::InvalidBase64` on bad encodings
/// - `CipherError::CiphertextTooShort` if there is no room for a nonce
/// - `CipherError::UnsupportedKeySize` unless the key decodes to 32 bytes
/// - `CipherError::DecryptionFailed` if authentication fails
pub fn decrypt(ciphertext: &str, key: &str) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let key_bytes = Zeroizing::new(hex::decode(key_material(key)?)?);

    let blob = BASE64.decode(ciphertext.trim())?;
    if blob.len() < NONCE_LEN {
        return Err(CipherError::CiphertextTooShort(blob.len()));
    }
    let (nonce, sealed) = blob.split_at(NONCE_LEN);

    trace!(
        key_bits = key_bytes.len() * 8,
        ciphertext_len = sealed.len(),
        "decrypting"
    );

    let cipher = Aes256Gcm::new_from_slice(&key_bytes)
        .map_err(|_| CipherError::UnsupportedKeySize(key_bytes.len()))?;
    let plaintext = cipher
        .decrypt(Nonce::<Aes256Gcm>::from_slice(nonce), sealed)
        .map_err(|_| CipherError::DecryptionFailed)?;

    trace!(plaintext_len = plaintext.len(), "decrypted");
    Ok(Zeroizing::new(plaintext))
}

/// Strip the scheme tag and check the remaining length.
fn key_material(key: &str) -> Result<&str, CipherError> {
    let material = key
        .get(KEY_TAG_LEN..)
        .ok_or(CipherError::InvalidKeyLength)?;
    if material.len() < MIN_KEY_HEX_LEN {
        return Err(CipherError::InvalidKeyLength);
    }
    Ok(material)
}
