//! Publishing secrets to a store.
//!
//! Secrets are written one at a time in registry order. The first failed
//! write stops the run: nothing after it is attempted and nothing before it
//! is rolled back. Re-running converges since every write replaces the
//! whole field map at its path.

use tracing::{info, warn};

use crate::core::registry::Secrets;
use crate::core::store::Store;
use crate::error::Result;

/// Outcome of a completed publish run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Paths written, in order.
    pub published: Vec<String>,
    /// Total fields written across all paths.
    pub fields: usize,
}

impl Report {
    pub fn len(&self) -> usize {
        self.published.len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }
}

/// Write every secret in `secrets` to `store` under `mount`.
///
/// Each secret's path and fields are logged right before its write.
///
/// # Errors
///
/// Returns the first error reported by the store.
pub fn publish<S>(store: &S, mount: &str, secrets: &Secrets) -> Result<Report>
where
    S: Store + ?Sized,
{
    let mut report = Report::default();

    for secret in secrets {
        if secret.path().is_empty() {
            warn!(mount, "publishing root-level fields to the empty path");
        }
        info!(
            backend = store.name(),
            path = secret.path(),
            fields = ?secret.fields(),
            "publishing secret"
        );

        store.put(mount, secret.path(), secret.fields())?;

        report.published.push(secret.path().to_string());
        report.fields += secret.fields().len();
    }

    Ok(report)
}
