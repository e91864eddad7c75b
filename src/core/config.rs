//! Runtime settings.
//!
//! The CLI resolves each setting from a flag, then an environment variable,
//! then a default. This module holds the resolved values and the path
//! handling shared by every source.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{DEFAULT_MOUNT, DEFAULT_SECRETS_FILE};
use crate::core::types::MountPath;
use crate::error::{ConfigError, Result};

/// Settings for one publish run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Secrets file, with `~` already expanded.
    pub secrets_file: PathBuf,
    /// KV mount secrets are written under.
    pub mount: MountPath,
}

impl Settings {
    /// Build settings from raw values, expanding `~` in the secrets path.
    ///
    /// Values are trimmed; a blank value falls back to its default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the path starts with `~` and no
    /// home directory can be determined.
    pub fn new(secrets_file: &str, mount: &str) -> Result<Self> {
        let secrets_file = or_default(secrets_file, DEFAULT_SECRETS_FILE);
        let settings = Self {
            secrets_file: expand_home(secrets_file)?,
            mount: or_default(mount, DEFAULT_MOUNT).to_string(),
        };
        debug!(
            secrets_file = %settings.secrets_file.display(),
            mount = %settings.mount,
            "settings resolved"
        );
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secrets_file: PathBuf::from(DEFAULT_SECRETS_FILE),
            mount: DEFAULT_MOUNT.to_string(),
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Other paths, including ones with `~` elsewhere, are returned unchanged.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if expansion is needed but the home
/// directory is unknown.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    expand_home_with(path, dirs::home_dir().as_deref())
}

/// [`expand_home`] against an explicit home directory.
pub fn expand_home_with(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match rest {
        Some(rest) => {
            let home = home.ok_or_else(|| ConfigError::NoHomeDir(path.to_string()))?;
            Ok(if rest.is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            })
        }
        None => Ok(PathBuf::from(path)),
    }
}
