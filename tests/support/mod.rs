//! Test support utilities for dotenv-vault integration tests.
//!
//! Provides isolated project directories, fixtures and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated: child processes use `.current_dir()`
/// and explicit environment variables so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment holding the sample `.env.vault`.
    pub fn with_dev_vault() -> Self {
        let t = Self::new();
        t.write(".env.vault", DEV_VAULT);
        t
    }

    /// Create a test environment with a `.env.vault` sealed from plaintext.
    ///
    /// Each entry is `(environment, key, plaintext)`.
    pub fn with_vault(fields: &[(&str, &str, &str)]) -> Self {
        let t = Self::new();
        t.write(".env.vault", &vault(fields));
        t
    }

    /// Write a file into the project directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Absolute path of a file in the project directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
