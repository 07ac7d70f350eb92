//! dotenv-vault - Decrypt .env.vault files into environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotenv_vault::cli::output;
use dotenv_vault::cli::{execute, Cli};
use dotenv_vault::error::{Error, KeyError, VaultError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DOTENV_VAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dotenv_vault=debug")
        } else {
            EnvFilter::new("dotenv_vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.key) {
        let suggestion = match &e {
            Error::Vault(VaultError::MissingCredential) => Some("set DOTENV_KEY or pass --key"),
            Error::Vault(VaultError::EnvironmentNotInVault(_)) => {
                Some("run: npx dotenv-vault build")
            }
            Error::Vault(VaultError::InvalidKey) => {
                Some("check that DOTENV_KEY matches the current .env.vault")
            }
            Error::Key(KeyError::MissingEnvironmentField) => {
                Some("append ?environment=<name> to the key url")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
