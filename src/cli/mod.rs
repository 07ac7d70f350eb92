//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod read;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::{KeyOverride, ProcessEnv};

/// dotenv-vault - Decrypt .env.vault files into environment variables.
#[derive(Parser)]
#[command(
    name = "dotenv-vault",
    about = "Decrypt .env.vault files into environment variables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Decryption key(s), comma-separated [default: $DOTENV_KEY]
    #[arg(long, global = true)]
    pub key: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with decrypted variables injected
    Run {
        /// Vault file(s) to load [default: .env.vault]
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,
        /// Override variables already set in the environment
        #[arg(long)]
        overload: bool,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Print decrypted variables
    Read {
        /// Vault file(s) to read [default: .env.vault]
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a vault decrypts, without printing values
    Check {
        /// Vault file(s) to check [default: .env.vault]
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// `key` overrides `DOTENV_KEY` from the process environment.
pub fn execute(command: Command, key: Option<String>) -> crate::error::Result<()> {
    use Command::*;

    let source = KeyOverride::new(key, ProcessEnv);

    match command {
        Run {
            files,
            overload,
            command,
        } => run::execute(&source, &files, &command, overload),
        Read { files, json } => read::execute(&source, &files, json),
        Check { files, json } => check::execute(&source, &files, json),
        Completions { shell } => completions::execute(shell),
    }
}
