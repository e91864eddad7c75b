//! Error types.
//!
//! Each concern gets its own enum; [`Error`] aggregates them so callers can
//! propagate with `?` and `main` can match on the variant to pick a hint.

use thiserror::Error;

/// Top-level error for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures while loading or decoding the secrets document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read secrets file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("document root must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("unsupported mapping key under '{path}': keys must be scalars")]
    UnsupportedKey { path: String },

    #[error("unsupported value at '{path}': {kind} values cannot be stored")]
    UnsupportedValue { path: String, kind: &'static str },
}

/// Failures while building the store client or writing to it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no Vault token: set VAULT_TOKEN or write one to ~/.vault-token")]
    MissingToken,

    #[error("invalid VAULT_ADDR '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("invalid VAULT_CLIENT_TIMEOUT '{0}': expected whole seconds")]
    InvalidTimeout(String),

    #[error("unable to initialize Vault client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for '{path}' failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("vault rejected '{path}' with status {status}: {message}")]
    Rejected {
        status: u16,
        path: String,
        message: String,
    },
}

/// Failures while resolving runtime settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory for '{0}'")]
    NoHomeDir(String),
}

pub type Result<T> = std::result::Result<T, Error>;
