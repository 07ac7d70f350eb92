//! Decryption key URLs.
//!
//! A `DOTENV_KEY` holds one or more comma-separated URLs of the form
//! `dotenv://:key_<hex>@dotenv.org/vault/.env.vault?environment=production`.
//! The password carries the key material and the `environment` parameter
//! selects which vault field it decrypts.

use std::fmt;

use tracing::trace;
use url::Url;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::KeyError;

/// A parsed decryption key URL.
pub struct KeyDescriptor {
    key: Zeroizing<String>,
    environment: String,
}

impl KeyDescriptor {
    /// Parse a single key URL.
    ///
    /// # Errors
    ///
    /// - `KeyError::InvalidUrl` if the string is a malformed URL
    /// - `KeyError::InvalidScheme` if the scheme is missing or not `dotenv`
    /// - `KeyError::MissingKeyField` if the URL has no password
    /// - `KeyError::MissingEnvironmentField` if `environment` is absent or empty
    pub fn parse(key_url: &str) -> Result<Self, KeyError> {
        // No scheme at all (empty entry, bare `key_...`) is a scheme error.
        let url = Url::parse(key_url).map_err(|e| match e {
            url::ParseError::RelativeUrlWithoutBase => KeyError::InvalidScheme,
            e => KeyError::InvalidUrl(e),
        })?;

        if url.scheme() != constants::KEY_SCHEME {
            return Err(KeyError::InvalidScheme);
        }

        let key = url.password().ok_or(KeyError::MissingKeyField)?;

        let environment = url
            .query_pairs()
            .find(|(name, _)| name == constants::ENVIRONMENT_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or(KeyError::MissingEnvironmentField)?;

        trace!(environment = %environment, "parsed key url");

        Ok(Self {
            key: Zeroizing::new(key.to_string()),
            environment,
        })
    }

    /// The tagged key material (`key_<hex>`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The environment name as written in the URL.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The vault field this key decrypts, e.g. `DOTENV_VAULT_PRODUCTION`.
    pub fn vault_field(&self) -> String {
        format!(
            "{}{}",
            constants::VAULT_FIELD_PREFIX,
            self.environment.to_uppercase()
        )
    }
}

impl fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDescriptor")
            .field("key", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

/// Split a multi-key credential into its entries.
///
/// Entries are trimmed and kept in order. Empty entries are kept too, so that
/// parsing them fails instead of being skipped.
pub fn resolve_key_set(credential: &str) -> Vec<&str> {
    credential.split(',').map(str::trim).collect()
}
