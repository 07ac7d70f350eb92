//! Vault.
//!
//! The `.env.vault` container and the decryption pipeline built on top of it:
//! credential, container, key set, ciphertext lookup, rotation, plaintext.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::{ProcessEnv, Source};
use crate::core::constants;
use crate::core::env;
use crate::core::key::{self, KeyDescriptor};
use crate::core::rotation::{self, Candidate};
use crate::core::types::{EncryptedValue, EnvMap, VaultField};
use crate::error::{CodecError, Result, VaultError};

/// A parsed `.env.vault` file.
///
/// Maps vault field names (`DOTENV_VAULT_<ENV>`) to base64 ciphertext.
#[derive(Debug, Clone)]
pub struct Vault {
    fields: EnvMap,
}

impl Vault {
    /// Parse a vault container from text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the container is not valid dotenv.
    pub fn parse(contents: &str) -> Result<Self> {
        let fields = env::parse(contents)?;
        debug!(fields = fields.len(), "parsed vault container");
        Ok(Self { fields })
    }

    /// Parse a vault container from a reader.
    ///
    /// # Errors
    ///
    /// Returns error if reading fails or the container is not valid dotenv.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::parse(&contents)
    }

    /// Ciphertext stored for a vault field.
    pub fn field(&self, name: &str) -> Option<&EncryptedValue> {
        self.fields.get(name)
    }

    /// Vault fields present in the container, in sorted order.
    pub fn environments(&self) -> impl Iterator<Item = &VaultField> {
        self.fields
            .keys()
            .filter(|name| name.starts_with(constants::VAULT_FIELD_PREFIX))
    }

    /// Decrypt the environment addressed by a `DOTENV_KEY` credential.
    ///
    /// Every comma-separated key is parsed and its vault field looked up
    /// before any decryption is attempted. The first malformed key or missing
    /// field aborts the whole call.
    ///
    /// # Errors
    ///
    /// - `KeyError` for the first malformed key URL
    /// - `VaultError::EnvironmentNotInVault` if a key targets a missing field
    /// - `VaultError::InvalidKey` if no key decrypts its ciphertext
    /// - `CodecError` if the plaintext is not valid dotenv
    pub fn decrypt(&self, credential: &str) -> Result<EnvMap> {
        let keys = key::resolve_key_set(credential);
        let mut descriptors = Vec::with_capacity(keys.len());

        for raw in keys {
            let descriptor = KeyDescriptor::parse(raw)?;
            let field = descriptor.vault_field();
            let ciphertext = self
                .field(&field)
                .ok_or_else(|| VaultError::EnvironmentNotInVault(field.clone()))?;
            descriptors.push((descriptor, ciphertext));
        }

        let candidates: Vec<Candidate<'_>> = descriptors
            .iter()
            .map(|(descriptor, ciphertext)| Candidate::new(descriptor.key(), ciphertext))
            .collect();
        let plaintext = rotation::rotate(&candidates)?;

        let text = std::str::from_utf8(&plaintext).map_err(|_| CodecError::InvalidUtf8)?;
        let vars = env::parse(text)?;

        debug!(vars = vars.len(), "vault decrypted");
        Ok(vars)
    }
}

/// Decrypt a vault using `DOTENV_KEY` from the given source.
///
/// The credential is read once, before the container is parsed. There is no
/// fallback to plaintext parsing here.
///
/// # Errors
///
/// Returns `VaultError::MissingCredential` if `DOTENV_KEY` is not set, and
/// otherwise any error from [`Vault::parse`] or [`Vault::decrypt`].
pub fn parse_with<S: Source + ?Sized>(source: &S, reader: impl Read) -> Result<EnvMap> {
    let credential = Zeroizing::new(
        source
            .dotenv_key()
            .ok_or(VaultError::MissingCredential)?,
    );

    Vault::from_reader(reader)?.decrypt(&credential)
}

/// Decrypt a vault using `DOTENV_KEY` from the process environment.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse(reader: impl Read) -> Result<EnvMap> {
    parse_with(&ProcessEnv, reader)
}
