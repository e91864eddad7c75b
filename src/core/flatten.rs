//! Depth-first flattening of a document into leaves.
//!
//! Every scalar in the tree is emitted together with the path of the mapping
//! that contains it. The path starts empty and each nested mapping appends
//! `/` and its key, so:
//!
//! ```text
//! b: 3            -> ("",       "b", 3)
//! a:
//!   x: 1          -> ("/a",     "x", 1)
//!   c:
//!     d:
//!       y: 2      -> ("/a/c/d", "y", 2)
//! ```
//!
//! A root-level leaf lives under the empty path and a first-level mapping
//! gets a leading separator. Store addresses are derived from these paths
//! as-is.

use crate::core::constants::PATH_SEPARATOR;
use crate::core::domain::{Document, Node, Scalar};

/// One emitted leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub path: String,
    pub key: String,
    pub value: Scalar,
}

/// Walk `document` depth-first, calling `visit(path, key, value)` per leaf.
///
/// Keys are visited in document order.
pub fn walk<F>(document: &Document, mut visit: F)
where
    F: FnMut(&str, &str, &Scalar),
{
    walk_at("", document, &mut visit);
}

fn walk_at<F>(path: &str, document: &Document, visit: &mut F)
where
    F: FnMut(&str, &str, &Scalar),
{
    for (key, node) in document.iter() {
        match node {
            Node::Map(inner) => {
                let child = format!("{}{}{}", path, PATH_SEPARATOR, key);
                walk_at(&child, inner, visit);
            }
            Node::Scalar(value) => visit(path, key, value),
        }
    }
}

/// Collect every leaf of `document` in depth-first order.
pub fn flatten(document: &Document) -> Vec<Leaf> {
    let mut leaves = Vec::new();
    walk(document, |path, key, value| {
        leaves.push(Leaf {
            path: path.to_string(),
            key: key.to_string(),
            value: value.clone(),
        });
    });
    leaves
}
