//! secret-pusher - Publish a nested YAML secrets file into Vault KV v2.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── push          # Publish and dry-run commands
//! └── core/             # Core library components
//!     ├── config        # Resolved settings, ~ expansion
//!     ├── document      # YAML decoding
//!     ├── domain/       # Document, Scalar, Secret
//!     ├── flatten       # Depth-first leaf emission
//!     ├── registry      # Path-keyed, ordered secrets
//!     ├── publish       # Fail-fast publish loop
//!     └── store/        # Store trait
//!         ├── vault     # Vault KV v2 client
//!         └── memory    # Recording store
//! ```
//!
//! # Example
//!
//! ```
//! use secret_pusher::{document, Memory, Secrets};
//!
//! let doc = document::parse("a:\n  x: 1\n  y: 2\nb: 3\n").unwrap();
//! let secrets = Secrets::from_document(&doc);
//!
//! let paths: Vec<&str> = secrets.paths().collect();
//! assert_eq!(paths, vec!["/a", ""]);
//!
//! let store = Memory::new();
//! secret_pusher::publish(&store, "secret", &secrets).unwrap();
//! assert_eq!(store.puts().len(), 2);
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Settings;
pub use crate::core::document;
pub use crate::core::domain::{Document, Node, Scalar, Secret};
pub use crate::core::flatten::{flatten, Leaf};
pub use crate::core::publish::{publish, Report};
pub use crate::core::registry::Secrets;
pub use crate::core::store::{Memory, Put, Store, Vault, VaultConfig};
pub use crate::core::types::Fields;
pub use crate::error::{Error, Result};
