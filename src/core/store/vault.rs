//! HashiCorp Vault KV version 2 backend.
//!
//! Writes each secret with `PUT {addr}/v1/{mount}/data/{path}` and a body of
//! `{"data": {...fields}}`. Empty segments are dropped when the URL is
//! joined, so the secret path `/a` is written to `.../data/a` and the empty
//! path to `.../data`. The secret path itself is never rewritten.
//!
//! ## Environment
//!
//! - `VAULT_ADDR`: server address (default `https://127.0.0.1:8200`)
//! - `VAULT_TOKEN`: auth token, falling back to `~/.vault-token`
//! - `VAULT_NAMESPACE`: Vault Enterprise namespace (optional)
//! - `VAULT_CLIENT_TIMEOUT`: request timeout in seconds (default 60)

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use super::Store;
use crate::core::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_VAULT_ADDR, PATH_SEPARATOR, TOKEN_FILE, VAULT_ADDR_ENV,
    VAULT_NAMESPACE_ENV, VAULT_TIMEOUT_ENV, VAULT_TOKEN_ENV,
};
use crate::core::types::Fields;
use crate::error::{Result, StoreError};

const TOKEN_HEADER: &str = "X-Vault-Token";
const NAMESPACE_HEADER: &str = "X-Vault-Namespace";

/// Connection settings for a Vault client.
#[derive(Debug)]
pub struct VaultConfig {
    pub address: Url,
    pub token: SecretString,
    pub namespace: Option<String>,
    pub timeout: Duration,
}

impl VaultConfig {
    /// Read settings from the process environment and `~/.vault-token`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingToken`, `InvalidAddress` or
    /// `InvalidTimeout` when the environment is unusable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir().as_deref())
    }

    /// Resolve settings through `lookup`, reading the token file under `home`.
    ///
    /// Values are trimmed and empty values count as unset.
    pub fn from_lookup<F>(lookup: F, home: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_addr = var(VAULT_ADDR_ENV).unwrap_or_else(|| DEFAULT_VAULT_ADDR.to_string());
        let address = Url::parse(&raw_addr).map_err(|e| StoreError::InvalidAddress {
            addr: raw_addr.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(address.scheme(), "http" | "https") {
            return Err(StoreError::InvalidAddress {
                addr: raw_addr,
                reason: format!("unsupported scheme '{}'", address.scheme()),
            }
            .into());
        }

        let token = var(VAULT_TOKEN_ENV)
            .or_else(|| home.and_then(read_token_file))
            .ok_or(StoreError::MissingToken)?;

        let timeout = match var(VAULT_TIMEOUT_ENV) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| StoreError::InvalidTimeout(raw))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            address,
            token: SecretString::from(token),
            namespace: var(VAULT_NAMESPACE_ENV),
            timeout,
        })
    }
}

fn read_token_file(home: &Path) -> Option<String> {
    let path: PathBuf = home.join(TOKEN_FILE);
    let contents = std::fs::read_to_string(&path).ok()?;
    let token = contents.trim();
    if token.is_empty() {
        return None;
    }
    debug!(path = %path.display(), "using token file");
    Some(token.to_string())
}

#[derive(Serialize)]
struct WriteRequest<'a> {
    data: &'a Fields,
}

#[derive(Deserialize)]
struct WriteResponse {
    data: Option<WriteMetadata>,
}

#[derive(Deserialize)]
struct WriteMetadata {
    version: Option<u64>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Vault KV v2 client.
#[derive(Debug)]
pub struct Vault {
    config: VaultConfig,
    http: Client,
}

impl Vault {
    /// Create a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Client` if the HTTP client cannot be built.
    pub fn new(config: VaultConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(StoreError::Client)?;
        Ok(Self { config, http })
    }

    /// Create a client from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(VaultConfig::from_env()?)
    }

    /// Server address without a trailing slash.
    pub fn address(&self) -> &str {
        self.config.address.as_str().trim_end_matches('/')
    }

    /// URL a secret at `path` under `mount` is written to.
    ///
    /// Vault answers `//` in a request path with a redirect, so empty
    /// segments are collapsed.
    pub fn data_url(&self, mount: &str, path: &str) -> String {
        let segments: Vec<&str> = mount
            .split(PATH_SEPARATOR)
            .chain(std::iter::once("data"))
            .chain(path.split(PATH_SEPARATOR))
            .filter(|segment| !segment.is_empty())
            .collect();
        format!("{}/v1/{}", self.address(), segments.join(PATH_SEPARATOR))
    }
}

impl Store for Vault {
    fn put(&self, mount: &str, path: &str, fields: &Fields) -> Result<()> {
        let url = self.data_url(mount, path);
        trace!(url = %url, fields = fields.len(), "writing secret");

        let mut request = self
            .http
            .put(&url)
            .header(TOKEN_HEADER, self.config.token.expose_secret())
            .json(&WriteRequest { data: fields });
        if let Some(namespace) = &self.config.namespace {
            request = request.header(NAMESPACE_HEADER, namespace.as_str());
        }

        let response = request.send().map_err(|source| StoreError::Request {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .filter(|e| !e.errors.is_empty())
                .map(|e| e.errors.join("; "))
                .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

            return Err(StoreError::Rejected {
                status: status.as_u16(),
                path: path.to_string(),
                message,
            }
            .into());
        }

        let version = response
            .json::<WriteResponse>()
            .ok()
            .and_then(|r| r.data)
            .and_then(|d| d.version);
        debug!(mount, path, ?version, "secret written");

        Ok(())
    }

    fn name(&self) -> &'static str {
        "vault"
    }
}
