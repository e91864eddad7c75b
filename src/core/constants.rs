//! Constants used throughout secret-pusher.
//!
//! Centralizes magic strings and default values.

/// Separator placed between ancestor keys when building a secret path.
pub const PATH_SEPARATOR: &str = "/";

/// Secrets file used when neither `--secrets` nor `SECRETS` is given.
pub const DEFAULT_SECRETS_FILE: &str = "./secrets.yaml";

/// KV mount used when neither `--mount` nor `MOUNT` is given.
pub const DEFAULT_MOUNT: &str = "secret";

/// Environment variable holding the secrets file location.
pub const SECRETS_ENV: &str = "SECRETS";

/// Environment variable holding the KV mount path.
pub const MOUNT_ENV: &str = "MOUNT";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SECRET_PUSHER_LOG";

/// Vault server address variable.
pub const VAULT_ADDR_ENV: &str = "VAULT_ADDR";

/// Vault token variable.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

/// Vault Enterprise namespace variable.
pub const VAULT_NAMESPACE_ENV: &str = "VAULT_NAMESPACE";

/// Request timeout variable, in seconds.
pub const VAULT_TIMEOUT_ENV: &str = "VAULT_CLIENT_TIMEOUT";

/// Address used when `VAULT_ADDR` is unset (the Vault client default).
pub const DEFAULT_VAULT_ADDR: &str = "https://127.0.0.1:8200";

/// Token file written by `vault login`, relative to HOME.
pub const TOKEN_FILE: &str = ".vault-token";

/// Request timeout used when `VAULT_CLIENT_TIMEOUT` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
