//! Formgraph Core — the value graph, dotted paths and the path resolver.
//!
//! This crate has no internal Formgraph dependencies. Widgets in
//! `formgraph-widgets` bind onto the graph described here.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`path`]: Dotted paths and list child ids
//! - [`resolver`]: Reading and writing the graph by path
//! - [`value`]: The graph itself

#![doc = include_str!("../README.md")]

pub mod error;
pub mod path;
pub mod resolver;
pub mod value;

mod proptests;

// Re-export key types at crate root for convenience
pub use error::{AddressError, Error, Result};
pub use path::Path;
pub use resolver::{AddressResult, PathResolver, lookup, sequence_len};
pub use value::{Kind, Mapping, Record, Sequence, Value};
