//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// Parsed environment variables, ordered by name.
pub type EnvMap = BTreeMap<String, String>;

/// A vault field name (e.g., DOTENV_VAULT_PRODUCTION).
pub type VaultField = String;

/// Base64 ciphertext stored under a vault field.
pub type EncryptedValue = String;
