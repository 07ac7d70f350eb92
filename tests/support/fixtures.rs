//! Test fixtures and constants.

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::Aes256Gcm;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Key material of the sample vault.
pub const DEV_KEY: &str = "key_0dec82bea24ada79a983dcc11b431e28838eae59a07a8f983247c7ca9027a925";

/// `DOTENV_KEY` for the sample vault.
pub const DEV_KEY_URL: &str = "dotenv://:key_0dec82bea24ada79a983dcc11b431e28838eae59a07a8f983247c7ca9027a925@dotenv.local/vault/.env.vault?environment=development";

/// A vault built with `npx dotenv-vault local build`, holding `HELLO=world`.
pub const DEV_VAULT: &str = r#"# .env.vault (generated with npx dotenv-vault local build)
DOTENV_VAULT_DEVELOPMENT="H2A2wOUZU+bjKH3kTpeua9iIhtK/q7/VpAn+LLVNnms+CtQ/cwXqiw=="
"#;

/// A retired key that no longer matches any vault.
pub const OLD_KEY: &str = "key_5f2b8e71c04d93a6b1e8f7c2d5a49e30b6c1f8d27a4e95c3b0d6f1a8e2c7b493";

/// A second valid key, used for rotated vaults.
pub const NEW_KEY: &str = "key_c41d7e2a9b5f08d36e1a4c7b2f9d0e85a3b6c1d47f2e9a08b5c3d6e1f4a7b290";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &str = r#"DATABASE_URL="postgres://localhost/mydb"
API_KEY=sk-test-12345
JWT_SECRET="super-secret-jwt-token"
REDIS_URL=redis://localhost:6379 # cache
"#;

/// Build a `DOTENV_KEY` url.
pub fn key_url(key: &str, environment: &str) -> String {
    format!(
        "dotenv://:{}@dotenv.local/vault/.env.vault?environment={}",
        key, environment
    )
}

/// Encrypt `plaintext` the way `npx dotenv-vault build` does.
pub fn seal(plaintext: &str, key: &str) -> String {
    let key_bytes = hex::decode(&key[4..]).expect("fixture key must be hex");
    let cipher = Aes256Gcm::new_from_slice(&key_bytes).expect("fixture key must be 32 bytes");
    let nonce: [u8; 12] = rand::random();

    let mut blob = nonce.to_vec();
    blob.extend(
        cipher
            .encrypt(Nonce::<Aes256Gcm>::from_slice(&nonce), plaintext.as_bytes())
            .expect("encryption failed"),
    );
    BASE64.encode(blob)
}

/// Render a vault from `(environment, key, plaintext)` entries.
pub fn vault(fields: &[(&str, &str, &str)]) -> String {
    let mut out = String::from("# .env.vault (generated for tests)\n");
    for (environment, key, plaintext) in fields {
        out.push_str(&format!(
            "DOTENV_VAULT_{}=\"{}\"\n",
            environment.to_uppercase(),
            seal(plaintext, key)
        ));
    }
    out
}
