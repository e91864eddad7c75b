//! In-memory store.
//!
//! Records every write instead of sending it anywhere. Backs `--dry-run`
//! and is handy in tests.

use std::cell::RefCell;

use super::Store;
use crate::core::types::Fields;
use crate::error::Result;

/// A single recorded write.
#[derive(Debug, Clone, PartialEq)]
pub struct Put {
    pub mount: String,
    pub path: String,
    pub fields: Fields,
}

/// Store that keeps writes in a list.
#[derive(Debug, Default)]
pub struct Memory {
    puts: RefCell<Vec<Put>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes in the order they were made.
    pub fn puts(&self) -> Vec<Put> {
        self.puts.borrow().clone()
    }

    /// Consume the store, returning the recorded writes.
    pub fn into_puts(self) -> Vec<Put> {
        self.puts.into_inner()
    }
}

impl Store for Memory {
    fn put(&self, mount: &str, path: &str, fields: &Fields) -> Result<()> {
        self.puts.borrow_mut().push(Put {
            mount: mount.to_string(),
            path: path.to_string(),
            fields: fields.clone(),
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
