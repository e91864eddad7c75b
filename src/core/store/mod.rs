//! Secret store backends.
//!
//! The publisher only needs one capability from a store: write a field map
//! at a path under a mount. Anything that can do that implements [`Store`].
//!
//! ## Adding a New Store
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `consul.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Consul { /* ... */ }
//!
//! impl Store for Consul {
//!     fn put(&self, mount: &str, path: &str, fields: &Fields) -> Result<()> {
//!         // Write to Consul KV
//!     }
//!     fn name(&self) -> &'static str {
//!         "consul"
//!     }
//! }
//! ```

use crate::core::types::Fields;
use crate::error::Result;

mod backend;
mod memory;
mod vault;

pub use backend::default_backend;
pub use memory::{Memory, Put};
pub use vault::{Vault, VaultConfig};

/// Versioned, path-addressed secret storage.
pub trait Store {
    /// Write `fields` at `path` within `mount`.
    ///
    /// Replaces whatever the store held at that path. Versioning, if any,
    /// is up to the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write is rejected or the request fails.
    fn put(&self, mount: &str, path: &str, fields: &Fields) -> Result<()>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn put(&self, mount: &str, path: &str, fields: &Fields) -> Result<()> {
        (**self).put(mount, path, fields)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
