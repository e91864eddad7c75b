//! Command helper methods for Test.

use super::fixtures::TEST_TOKEN;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables the binary reads that must not leak in from the host.
const SCRUBBED_ENV: &[&str] = &[
    "SECRETS",
    "MOUNT",
    "VAULT_ADDR",
    "VAULT_TOKEN",
    "VAULT_NAMESPACE",
    "VAULT_CLIENT_TIMEOUT",
    "SECRET_PUSHER_LOG",
];

impl Test {
    /// Create a secret-pusher command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Vault and secret-pusher variables removed, NO_COLOR set
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("secret-pusher").expect("failed to find secret-pusher binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command pointed at a Vault server with a token.
    pub fn vault_cmd(&self, addr: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("VAULT_ADDR", addr).env("VAULT_TOKEN", TEST_TOKEN);
        cmd
    }

    /// Shortcut for a publish run against `addr`.
    pub fn push(&self, addr: &str, args: &[&str]) -> Output {
        self.vault_cmd(addr)
            .args(args)
            .output()
            .expect("failed to run secret-pusher")
    }

    /// Shortcut for `secret-pusher --dry-run`.
    pub fn dry_run(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("--dry-run")
            .args(args)
            .output()
            .expect("failed to run secret-pusher --dry-run")
    }
}
