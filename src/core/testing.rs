//! Shared fixtures for unit tests.

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::Aes256Gcm;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::core::constants::{KEY_TAG_LEN, NONCE_LEN};

/// Tagged key material for `DEV_VAULT`.
pub const DEV_KEY: &str = "key_0dec82bea24ada79a983dcc11b431e28838eae59a07a8f983247c7ca9027a925";

/// A vault built with `npx dotenv-vault local build`, holding `HELLO=world`.
pub const DEV_VAULT: &str = "# .env.vault (generated with npx dotenv-vault local build)\n\
    DOTENV_VAULT_DEVELOPMENT=\"H2A2wOUZU+bjKH3kTpeua9iIhtK/q7/VpAn+LLVNnms+CtQ/cwXqiw==\"\n";

/// Build a `DOTENV_KEY` URL.
pub fn key_url(key: &str, environment: &str) -> String {
    format!(
        "dotenv://:{}@dotenv.local/vault/.env.vault?environment={}",
        key, environment
    )
}

/// Encrypt `plaintext` the way the vault build step does.
pub fn seal(plaintext: &str, key: &str) -> String {
    let key_bytes = hex::decode(&key[KEY_TAG_LEN..]).unwrap();
    let cipher = Aes256Gcm::new_from_slice(&key_bytes).unwrap();
    let nonce: [u8; NONCE_LEN] = rand::random();

    let mut blob = nonce.to_vec();
    blob.extend(
        cipher
            .encrypt(Nonce::<Aes256Gcm>::from_slice(&nonce), plaintext.as_bytes())
            .unwrap(),
    );
    BASE64.encode(blob)
}

/// Render a vault container from `(environment, ciphertext)` pairs.
pub fn vault(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(environment, ciphertext)| {
            format!(
                "DOTENV_VAULT_{}=\"{}\"\n",
                environment.to_uppercase(),
                ciphertext
            )
        })
        .collect()
}
