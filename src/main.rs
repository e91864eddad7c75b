//! secret-pusher - Publish a nested YAML secrets file into Vault KV v2.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secret_pusher::cli::output;
use secret_pusher::cli::{execute, Cli};
use secret_pusher::core::constants::LOG_ENV;
use secret_pusher::error::{DocumentError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secret_pusher=debug")
        } else {
            EnvFilter::new("secret_pusher=info")
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

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Store(StoreError::MissingToken) => Some("run: vault login"),
            Error::Store(StoreError::Rejected { status: 403, .. }) => {
                Some("check that the token's policy allows writes to this mount")
            }
            Error::Store(StoreError::Rejected { status: 404, .. }) => {
                Some("check --mount: it must name a KV version 2 secrets engine")
            }
            Error::Document(DocumentError::Read { .. }) => {
                Some("pass --secrets <FILE> or set SECRETS")
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
