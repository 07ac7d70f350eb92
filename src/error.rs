//! Error types.
//!
//! Each concern owns an error enum; [`Error`] wraps them for the crate-wide
//! [`Result`] alias. Display strings are user-facing and stable.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// A single `DOTENV_KEY` entry could not be parsed.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("INVALID_DOTENV_KEY: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("INVALID_DOTENV_KEY: URL scheme must be 'dotenv'")]
    InvalidScheme,

    #[error("INVALID_DOTENV_KEY: Missing key part")]
    MissingKeyField,

    #[error("INVALID_DOTENV_KEY: Missing environment part")]
    MissingEnvironmentField,
}

/// Failure of a single decryption attempt.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("INVALID_DOTENV_KEY: Key part must be 64 characters long (or more)")]
    InvalidKeyLength,

    #[error("invalid key encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid ciphertext encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("ciphertext too short: {0} bytes")]
    CiphertextTooShort(usize),

    #[error("unsupported key size: {0} bytes")]
    UnsupportedKeySize(usize),

    #[error("decryption failed")]
    DecryptionFailed,
}

/// Vault-level failures.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("NOT_FOUND_DOTENV_KEY: Cannot find environment variable 'DOTENV_KEY'")]
    MissingCredential,

    #[error("NOT_FOUND_DOTENV_ENVIRONMENT: Cannot locate environment {0} in your .env.vault file. Run 'npx dotenv-vault build' to include it.")]
    EnvironmentNotInVault(String),

    #[error("INVALID_DOTENV_KEY: Key must be valid.")]
    InvalidKey,
}

/// Malformed dotenv text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("line {line}: invalid variable name '{name}'")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: expected '=' after variable name")]
    MissingSeparator { line: usize },

    #[error("line {line}: unterminated quoted value")]
    UnterminatedQuote { line: usize },

    #[error("content is not valid UTF-8")]
    InvalidUtf8,
}

pub type Result<T> = std::result::Result<T, Error>;
