//! Path-keyed collection of secrets.
//!
//! Leaves emitted by the flattener are grouped by path. Each distinct path
//! becomes one [`Secret`]; later leaves for a known path merge into it.
//! Iteration order is the order in which paths were first seen, which is
//! also the publish order.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::domain::{Document, Secret};
use crate::core::flatten;
use crate::core::types::Fields;

/// Ordered, deduplicated secrets built from one document.
#[derive(Debug, Default)]
pub struct Secrets {
    records: Vec<Secret>,
    index: HashMap<String, usize>,
}

impl Secrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry for a whole document.
    pub fn from_document(document: &Document) -> Self {
        let mut secrets = Self::new();
        secrets.fill(document);
        secrets
    }

    /// Add fields under `path`.
    ///
    /// Merges into the existing secret for `path` (overwriting duplicate
    /// keys, keeping its position), or appends a new secret. An empty field
    /// map creates nothing.
    pub fn add(&mut self, path: &str, fields: &Fields) {
        if let Some(&position) = self.index.get(path) {
            trace!(path, added = fields.len(), "merging into existing secret");
            self.records[position].merge(fields.clone());
            return;
        }

        if fields.is_empty() {
            return;
        }

        trace!(path, "new secret");
        self.index.insert(path.to_string(), self.records.len());
        self.records.push(Secret::new(path.to_string(), fields.clone()));
    }

    /// Flatten `document` and add one field per leaf.
    pub fn fill(&mut self, document: &Document) {
        flatten::walk(document, |path, key, value| {
            let mut fields = Fields::new();
            fields.insert(key.to_string(), value.clone());
            self.add(path, &fields);
        });

        debug!(
            secrets = self.records.len(),
            fields = self.field_count(),
            "registry filled"
        );
    }

    /// Secret stored under `path`.
    pub fn get(&self, path: &str) -> Option<&Secret> {
        self.index.get(path).map(|&i| &self.records[i])
    }

    /// Secrets in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Secret> {
        self.records.iter()
    }

    /// Paths in first-seen order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Secret::path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of fields across all secrets.
    pub fn field_count(&self) -> usize {
        self.records.iter().map(|s| s.fields().len()).sum()
    }
}

impl<'a> IntoIterator for &'a Secrets {
    type Item = &'a Secret;
    type IntoIter = std::slice::Iter<'a, Secret>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Secrets {
    type Item = Secret;
    type IntoIter = std::vec::IntoIter<Secret>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
