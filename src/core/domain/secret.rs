//! Secret type.
//!
//! One store path together with the merged leaf values that live under it.

use crate::core::domain::Scalar;
use crate::core::types::{FieldKey, Fields, SecretPath};

/// A path and its merged field map.
#[derive(Debug, Clone, PartialEq)]
pub struct Secret {
    path: SecretPath,
    fields: Fields,
}

impl Secret {
    /// Create a secret from a path and its initial fields.
    pub fn new(path: SecretPath, fields: Fields) -> Self {
        Self { path, fields }
    }

    /// Store path of this secret.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Field map written to the store.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Value of a single field.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }

    /// Merge fields into this secret, overwriting existing keys.
    pub fn merge<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (FieldKey, Scalar)>,
    {
        self.fields.extend(fields);
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
