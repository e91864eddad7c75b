//! Core library components.
//!
//! The document is decoded, flattened into leaves, grouped into secrets by
//! path and then published to a store, in that order.

pub mod config;
pub mod constants;
pub mod document;
pub mod domain;
pub mod flatten;
pub mod publish;
pub mod registry;
pub mod store;
pub mod types;
