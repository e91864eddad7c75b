//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

use crate::core::domain::Scalar;

/// A slash-delimited location in the store (e.g. `/app/database`).
///
/// Root-level leaves live under the empty path.
pub type SecretPath = String;

/// A leaf key inside one secret (e.g. `password`).
pub type FieldKey = String;

/// The KV mount a secret path is addressed under (e.g. `secret`).
pub type MountPath = String;

/// The merged leaf values of one secret.
pub type Fields = BTreeMap<FieldKey, Scalar>;
