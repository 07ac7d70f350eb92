//! Loading env files into an environment.
//!
//! When `DOTENV_KEY` is set, files are treated as encrypted vaults
//! (default `.env.vault`). Otherwise they are read as plain dotenv files
//! (default `.env`). The choice is made here, never inside the vault engine.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::core::config::{Environment, ProcessEnv, Source};
use crate::core::constants;
use crate::core::env;
use crate::core::types::EnvMap;
use crate::core::vault;
use crate::error::Result;

/// How env files are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Encrypted `.env.vault` files, decrypted with `DOTENV_KEY`.
    Vault,
    /// Plain dotenv files.
    Plain,
}

impl Strategy {
    /// `Vault` if the source defines `DOTENV_KEY`, `Plain` otherwise.
    pub fn select<S: Source + ?Sized>(source: &S) -> Self {
        if source.contains(constants::DOTENV_KEY) {
            Self::Vault
        } else {
            Self::Plain
        }
    }

    /// File read when no paths are given.
    pub fn default_file(self) -> &'static str {
        match self {
            Self::Vault => constants::VAULT_FILE,
            Self::Plain => constants::ENV_FILE,
        }
    }

    fn paths<P: AsRef<Path>>(self, paths: &[P]) -> Vec<PathBuf> {
        if paths.is_empty() {
            vec![PathBuf::from(self.default_file())]
        } else {
            paths.iter().map(|p| p.as_ref().to_path_buf()).collect()
        }
    }
}

/// Read a single file with the given strategy.
///
/// # Errors
///
/// Returns error if the file cannot be opened, parsed or decrypted.
pub fn read_file<S: Source + ?Sized>(
    source: &S,
    strategy: Strategy,
    path: impl AsRef<Path>,
) -> Result<EnvMap> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?strategy, "reading env file");

    let mut file = File::open(path)?;
    match strategy {
        Strategy::Vault => vault::parse_with(source, file),
        Strategy::Plain => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(env::parse(&contents)?)
        }
    }
}

/// Read and merge files without touching any environment.
///
/// With no paths, reads the strategy's default file. Later files override
/// earlier ones.
///
/// # Errors
///
/// Returns the first read, parse or decryption error.
pub fn read_with<S: Source + ?Sized, P: AsRef<Path>>(
    source: &S,
    paths: &[P],
) -> Result<EnvMap> {
    let strategy = Strategy::select(source);
    let mut vars = EnvMap::new();

    for path in strategy.paths(paths) {
        vars.extend(read_file(source, strategy, &path)?);
    }

    Ok(vars)
}

/// Compute the variables a load would set.
///
/// Without `overload`, variables already in `source` are kept and the first
/// file to define a name wins. With `overload`, the last file wins.
///
/// # Errors
///
/// Returns the first read, parse or decryption error. Nothing is applied
/// in that case.
pub fn pending_with<S: Source + ?Sized, P: AsRef<Path>>(
    source: &S,
    paths: &[P],
    overload: bool,
) -> Result<EnvMap> {
    let strategy = Strategy::select(source);
    let mut pending = EnvMap::new();

    for path in strategy.paths(paths) {
        for (name, value) in read_file(source, strategy, &path)? {
            if overload || (!pending.contains_key(&name) && !source.contains(&name)) {
                pending.insert(name, value);
            }
        }
    }

    debug!(vars = pending.len(), overload, "resolved variables to set");
    Ok(pending)
}

/// Load files into `env` without overriding existing variables.
///
/// Returns the number of variables set.
///
/// # Errors
///
/// See [`pending_with`].
pub fn load_with<E: Environment + ?Sized, P: AsRef<Path>>(
    env: &mut E,
    paths: &[P],
) -> Result<usize> {
    let pending = pending_with(&*env, paths, false)?;
    Ok(apply(env, &pending))
}

/// Load files into `env`, overriding existing variables.
///
/// Returns the number of variables set.
///
/// # Errors
///
/// See [`pending_with`].
pub fn overload_with<E: Environment + ?Sized, P: AsRef<Path>>(
    env: &mut E,
    paths: &[P],
) -> Result<usize> {
    let pending = pending_with(&*env, paths, true)?;
    Ok(apply(env, &pending))
}

fn apply<E: Environment + ?Sized>(env: &mut E, vars: &EnvMap) -> usize {
    for (name, value) in vars {
        env.set(name, value);
    }
    vars.len()
}

/// Run a command with variables from `paths` injected.
///
/// The variables are passed to the child only; the current process
/// environment is left untouched. Stdio is inherited.
///
/// # Errors
///
/// Returns error if loading fails or the command cannot be spawned.
pub fn exec_with<S: Source + ?Sized, P: AsRef<Path>>(
    source: &S,
    paths: &[P],
    command: &str,
    args: &[String],
    overload: bool,
) -> Result<ExitStatus> {
    let pending = pending_with(source, paths, overload)?;

    let mut cmd = Command::new(command);
    cmd.args(args);
    cmd.envs(&pending);

    debug!(command, args = args.len(), "spawning command");
    Ok(cmd.status()?)
}

/// Read files using the process environment. See [`read_with`].
///
/// # Errors
///
/// Returns the first read, parse or decryption error.
pub fn read<P: AsRef<Path>>(paths: &[P]) -> Result<EnvMap> {
    read_with(&ProcessEnv, paths)
}

/// Load files into the process environment, keeping existing variables.
///
/// Call this as early as possible in `main`.
///
/// # Errors
///
/// See [`pending_with`].
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<usize> {
    load_with(&mut ProcessEnv, paths)
}

/// Load files into the process environment, replacing existing variables.
///
/// # Errors
///
/// See [`pending_with`].
pub fn overload<P: AsRef<Path>>(paths: &[P]) -> Result<usize> {
    overload_with(&mut ProcessEnv, paths)
}

/// Run a command with variables loaded against the process environment.
///
/// # Errors
///
/// See [`exec_with`].
pub fn exec<P: AsRef<Path>>(
    paths: &[P],
    command: &str,
    args: &[String],
    overload: bool,
) -> Result<ExitStatus> {
    exec_with(&ProcessEnv, paths, command, args, overload)
}
