//! Backend selection for publishing.

use tracing::info;

use super::{Store, Vault};
use crate::error::Result;

/// Store used by the CLI.
///
/// Builds a Vault KV v2 client from the environment (`VAULT_ADDR`,
/// `VAULT_TOKEN` or `~/.vault-token`, `VAULT_NAMESPACE`,
/// `VAULT_CLIENT_TIMEOUT`).
///
/// # Errors
///
/// Returns `StoreError` if the environment does not describe a usable client.
pub fn default_backend() -> Result<Box<dyn Store>> {
    let vault = Vault::from_env()?;
    info!(address = %vault.address(), "using Vault backend");
    Ok(Box::new(vault))
}
