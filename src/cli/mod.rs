//! Command-line interface.

pub mod output;
pub mod push;

use clap::Parser;

use crate::core::config::Settings;
use crate::core::constants::{DEFAULT_MOUNT, DEFAULT_SECRETS_FILE, MOUNT_ENV, SECRETS_ENV};

/// secret-pusher - Publish a nested YAML secrets file into Vault KV v2.
#[derive(Parser, Debug)]
#[command(
    name = "secret-pusher",
    about = "Publish a nested YAML secrets file into a Vault KV v2 mount",
    version,
    after_help = "Vault connection: VAULT_ADDR, VAULT_TOKEN (or ~/.vault-token), VAULT_NAMESPACE, VAULT_CLIENT_TIMEOUT"
)]
pub struct Cli {
    /// YAML file with secrets
    #[arg(long, value_name = "FILE", env = SECRETS_ENV, default_value = DEFAULT_SECRETS_FILE)]
    pub secrets: String,

    /// The path to the KV mount
    #[arg(long, value_name = "PATH", env = MOUNT_ENV, default_value = DEFAULT_MOUNT)]
    pub mount: String,

    /// Show the secrets that would be written without contacting Vault
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let settings = Settings::new(&cli.secrets, &cli.mount)?;

    if cli.dry_run {
        push::dry_run(&settings)
    } else {
        push::execute(&settings)
    }
}
