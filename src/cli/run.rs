//! Run command.
//!
//! Executes a command with decrypted variables injected into its environment.

use std::path::PathBuf;

use tracing::debug;

use crate::core::config::Source;
use crate::core::load;
use crate::error::{Error, Result};

/// Run a command with variables from the given files.
///
/// Exits the process with the child's exit code.
pub fn execute<S: Source>(
    source: &S,
    files: &[PathBuf],
    command: &[String],
    overload: bool,
) -> Result<()> {
    let exit_code = run_with_vars(source, files, command, overload)?;
    std::process::exit(exit_code);
}

fn run_with_vars<S: Source>(
    source: &S,
    files: &[PathBuf],
    command: &[String],
    overload: bool,
) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let status = load::exec_with(source, files, program, args, overload)?;
    debug!(?status, "command exited");

    // Killed by a signal: no exit code available.
    Ok(status.code().unwrap_or(1))
}
