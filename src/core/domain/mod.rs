//! Domain types.

mod document;
mod scalar;
mod secret;

pub use document::{Document, Node};
pub use scalar::Scalar;
pub use secret::Secret;
