//! Check command.
//!
//! Decrypts each vault and reports what it contains, without printing any
//! values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::output;
use crate::core::config::Source;
use crate::core::constants;
use crate::core::vault::Vault;
use crate::error::{Result, VaultError};

/// Summary of one decrypted vault file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub file: String,
    /// Vault fields present in the file.
    pub environments: Vec<String>,
    /// Names of the decrypted variables.
    pub variables: Vec<String>,
}

/// Decrypt the given vaults and print a summary.
pub fn execute<S: Source>(source: &S, files: &[PathBuf], json: bool) -> Result<()> {
    let reports = check(source, files)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        output::header(&output::path(&report.file));
        output::kv("environments", report.environments.join(", "));
        output::kv("variables", report.variables.len());
        for name in &report.variables {
            output::list_item(&output::key(name));
        }
    }
    output::success("vault decrypted");

    Ok(())
}

/// Decrypt each file with the source's `DOTENV_KEY`.
///
/// Unlike `read`, this never falls back to plain `.env` files.
///
/// # Errors
///
/// Returns `VaultError::MissingCredential` if no key is configured, or the
/// first read, parse or decryption error.
pub fn check<S: Source>(source: &S, files: &[PathBuf]) -> Result<Vec<Report>> {
    let credential = zeroize::Zeroizing::new(
        source
            .dotenv_key()
            .ok_or(VaultError::MissingCredential)?,
    );

    let default = [PathBuf::from(constants::VAULT_FILE)];
    let files = if files.is_empty() { &default[..] } else { files };

    files
        .iter()
        .map(|file| check_file(file, &credential))
        .collect()
}

fn check_file(file: &Path, credential: &str) -> Result<Report> {
    let vault = Vault::parse(&fs::read_to_string(file)?)?;
    let vars = vault.decrypt(credential)?;

    Ok(Report {
        file: file.display().to_string(),
        environments: vault.environments().cloned().collect(),
        variables: vars.into_keys().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MemoryEnv;
    use crate::core::testing::{key_url, DEV_KEY, DEV_VAULT};
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_check_reports_names_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".env.vault");
        fs::write(&path, DEV_VAULT).unwrap();

        let source = MemoryEnv::with_key(&key_url(DEV_KEY, "development"));
        let reports = check(&source, &[path]).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].environments, vec!["DOTENV_VAULT_DEVELOPMENT"]);
        assert_eq!(reports[0].variables, vec!["HELLO"]);

        let json = serde_json::to_string(&reports).unwrap();
        assert!(!json.contains("world"));
    }

    #[test]
    fn test_check_requires_key() {
        let err = check(&MemoryEnv::new(), &[]).unwrap_err();
        assert!(matches!(err, Error::Vault(VaultError::MissingCredential)));
    }
}
