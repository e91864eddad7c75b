//! Secrets document loading.
//!
//! Reads a YAML file and decodes it into a [`Document`]. Scalar mapping keys
//! are stringified; sequences, tagged values and collection keys have no
//! place in a KV field map and are rejected with the offending path.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::core::constants::PATH_SEPARATOR;
use crate::core::domain::{Document, Node, Scalar};
use crate::error::{DocumentError, Result};

/// Load and decode a secrets file.
///
/// # Errors
///
/// Returns `DocumentError::Read` if the file cannot be read, or any decoding
/// error from [`parse`].
pub fn load(path: &Path) -> Result<Document> {
    debug!(path = %path.display(), "loading secrets document");

    let contents = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let document = parse(&contents)?;
    debug!(keys = document.len(), "secrets document loaded");
    Ok(document)
}

/// Decode YAML text into a document.
///
/// An empty input yields an empty document. Merge keys (`<<: *anchor`) are
/// resolved before decoding; keys written alongside a merge win over the
/// merged ones.
///
/// # Errors
///
/// Returns `DocumentError::Parse` for malformed YAML, `NotAMapping` when the
/// root is not a mapping, and `UnsupportedKey`/`UnsupportedValue` for shapes
/// a KV secret cannot hold.
pub fn parse(contents: &str) -> Result<Document> {
    if contents.trim().is_empty() {
        return Ok(Document::new());
    }

    let mut value: Value = serde_yaml::from_str(contents).map_err(DocumentError::Parse)?;
    value.apply_merge().map_err(DocumentError::Parse)?;

    match value {
        Value::Null => Ok(Document::new()),
        Value::Mapping(mapping) => decode_mapping(mapping, ""),
        other => Err(DocumentError::NotAMapping(value_kind(&other)).into()),
    }
}

fn decode_mapping(mapping: Mapping, path: &str) -> Result<Document> {
    let mut document = Document::new();

    for (key, value) in mapping {
        let key = decode_key(key, path)?;
        let child = format!("{}{}{}", path, PATH_SEPARATOR, key);

        let node = match value {
            Value::Mapping(inner) => Node::Map(decode_mapping(inner, &child)?),
            other => Node::Scalar(decode_scalar(other, &child)?),
        };
        document.insert(key, node);
    }

    Ok(document)
}

fn decode_key(key: Value, path: &str) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(DocumentError::UnsupportedKey {
            path: path.to_string(),
        }
        .into()),
    }
}

fn decode_scalar(value: Value, path: &str) -> Result<Scalar> {
    let unsupported = |kind| DocumentError::UnsupportedValue {
        path: path.to_string(),
        kind,
    };

    match value {
        Value::Null => Ok(Scalar::Null),
        Value::Bool(b) => Ok(Scalar::Bool(b)),
        Value::String(s) => Ok(Scalar::String(s)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Scalar::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Scalar::Number)
                    .ok_or_else(|| unsupported("non-finite number").into())
            }
        }
        other => Err(unsupported(value_kind(&other)).into()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
