//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a dotenv-vault command without a key.
    ///
    /// Returns a Command configured with:
    /// - `DOTENV_KEY` and `DOTENV_VAULT_LOG` removed from the inherited environment
    /// - `NO_COLOR` set so output can be matched literally
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("dotenv-vault").expect("failed to find dotenv-vault binary");
        cmd.env_remove("DOTENV_KEY");
        cmd.env_remove("DOTENV_VAULT_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create a dotenv-vault command with `DOTENV_KEY` set.
    pub fn cmd_with_key(&self, key: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("DOTENV_KEY", key);
        cmd
    }

    /// Shortcut for `dotenv-vault read` with `DOTENV_KEY` set.
    pub fn read(&self, key: &str) -> Output {
        self.cmd_with_key(key)
            .arg("read")
            .output()
            .expect("failed to run dotenv-vault read")
    }

    /// Shortcut for `dotenv-vault read --json` with `DOTENV_KEY` set.
    pub fn read_json(&self, key: &str) -> Output {
        self.cmd_with_key(key)
            .args(["read", "--json"])
            .output()
            .expect("failed to run dotenv-vault read --json")
    }

    /// Shortcut for `dotenv-vault check` with `DOTENV_KEY` set.
    pub fn check(&self, key: &str) -> Output {
        self.cmd_with_key(key)
            .arg("check")
            .output()
            .expect("failed to run dotenv-vault check")
    }

    /// Shortcut for `dotenv-vault run -- <args>` with `DOTENV_KEY` set.
    pub fn run(&self, key: &str, args: &[&str]) -> Output {
        self.cmd_with_key(key)
            .arg("run")
            .arg("--")
            .args(args)
            .output()
            .expect("failed to run dotenv-vault run")
    }
}
