//! Publish command.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::domain::Secret;
use crate::core::registry::Secrets;
use crate::core::store::{self, Memory};
use crate::core::{document, publish};
use crate::error::Result;

/// Compile the secrets file into a registry.
pub fn compile(path: &Path) -> Result<Secrets> {
    let document = document::load(path)?;
    let secrets = Secrets::from_document(&document);
    debug!(
        secrets = secrets.len(),
        fields = secrets.field_count(),
        "secrets compiled"
    );
    Ok(secrets)
}

/// Publish every secret in the secrets file to Vault.
///
/// The Vault client is built before the file is read, so a bad environment
/// fails without touching the document.
pub fn execute(settings: &Settings) -> Result<()> {
    let store = store::default_backend()?;
    let secrets = compile(&settings.secrets_file)?;

    if secrets.is_empty() {
        output::warn("secrets file has no values");
        output::dimmed("nothing to publish");
        return Ok(());
    }

    let report = publish::publish(&store, &settings.mount, &secrets)?;

    output::success(&format!(
        "published {} {} ({} fields) to {}",
        report.len(),
        plural(report.len()),
        report.fields,
        output::path(&settings.mount)
    ));
    Ok(())
}

/// Print the secrets that would be published, without contacting Vault.
pub fn dry_run(settings: &Settings) -> Result<()> {
    let secrets = compile(&settings.secrets_file)?;

    if secrets.is_empty() {
        output::warn("secrets file has no values");
        output::dimmed("nothing to publish");
        return Ok(());
    }

    let store = Memory::new();
    let report = publish::publish(&store, &settings.mount, &secrets)?;

    for secret in &secrets {
        render(&settings.mount, secret);
    }

    println!();
    output::success(&format!(
        "{} {} ({} fields) would be written to {}",
        report.len(),
        plural(report.len()),
        report.fields,
        output::path(&settings.mount)
    ));
    output::dimmed("dry run: nothing was sent to Vault");
    Ok(())
}

fn render(mount: &str, secret: &Secret) {
    let location = if secret.path().is_empty() {
        format!("{}/data/ (root)", mount)
    } else {
        format!("{}/data/{}", mount, secret.path())
    };
    output::section(&location);
    for (key, value) in secret.fields() {
        output::kv(key, value.kind());
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "secret"
    } else {
        "secrets"
    }
}
