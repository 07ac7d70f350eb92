//! Constants used throughout dotenv-vault.
//!
//! Centralizes magic strings and protocol values.

/// Environment variable holding the comma-separated decryption keys.
pub const DOTENV_KEY: &str = "DOTENV_KEY";

/// Default encrypted vault file name.
pub const VAULT_FILE: &str = ".env.vault";

/// Default plaintext environment file name.
pub const ENV_FILE: &str = ".env";

/// URL scheme every key must use.
pub const KEY_SCHEME: &str = "dotenv";

/// Query parameter naming the target environment.
pub const ENVIRONMENT_PARAM: &str = "environment";

/// Prefix of every vault field name (`DOTENV_VAULT_PRODUCTION`, ...).
pub const VAULT_FIELD_PREFIX: &str = "DOTENV_VAULT_";

/// Length of the scheme tag in front of the key material (`key_`).
pub const KEY_TAG_LEN: usize = 4;

/// Minimum number of hex characters after the scheme tag.
pub const MIN_KEY_HEX_LEN: usize = 64;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;
