//! Configuration and process environment access.
//!
//! The vault engine never reads global state directly. Lookups go through a
//! [`Source`], and variable injection goes through an [`Environment`], so the
//! same code runs against the real process or an in-memory map.

use std::collections::BTreeMap;

use tracing::trace;

use crate::core::constants;

/// Read-only configuration lookup.
pub trait Source {
    /// Look up a variable by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Whether a variable is defined (even if empty).
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The raw `DOTENV_KEY` credential, if configured.
    fn dotenv_key(&self) -> Option<String> {
        self.get(constants::DOTENV_KEY)
    }
}

/// A mutable set of environment variables.
pub trait Environment: Source {
    /// Set a variable, replacing any existing value.
    fn set(&mut self, name: &str, value: &str);
}

/// The environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-unicode values cannot be read, but still count as present.
        std::env::var_os(name).and_then(|v| v.into_string().ok())
    }

    fn contains(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

impl Environment for ProcessEnv {
    fn set(&mut self, name: &str, value: &str) {
        trace!(name, "setting process variable");
        std::env::set_var(name, value);
    }
}

/// In-memory environment, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment holding a single `DOTENV_KEY`.
    pub fn with_key(key: &str) -> Self {
        let mut env = Self::new();
        env.set(constants::DOTENV_KEY, key);
        env
    }

    /// All variables.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Source for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl Environment for MemoryEnv {
    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

/// A source that layers an explicit key over another source.
///
/// Used by the CLI when `--key` is passed on the command line.
#[derive(Clone)]
pub struct KeyOverride<S> {
    key: Option<String>,
    inner: S,
}

impl<S: Source> KeyOverride<S> {
    pub fn new(key: Option<String>, inner: S) -> Self {
        Self { key, inner }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for KeyOverride<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyOverride")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S: Source> Source for KeyOverride<S> {
    fn get(&self, name: &str) -> Option<String> {
        if name == constants::DOTENV_KEY {
            if let Some(key) = &self.key {
                return Some(key.clone());
            }
        }
        self.inner.get(name)
    }

    fn contains(&self, name: &str) -> bool {
        (name == constants::DOTENV_KEY && self.key.is_some()) || self.inner.contains(name)
    }
}
