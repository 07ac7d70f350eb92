//! Completions command.

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Print a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    print!("{}", render(shell)?);
    Ok(())
}

fn render(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    clap_complete::generate(
        CompletionShell::from(shell),
        &mut cmd,
        "dotenv-vault",
        &mut script,
    );
    String::from_utf8(script).map_err(|e| crate::error::Error::Other(e.to_string()))
}
