//! Error types for formgraph-core

use thiserror::Error;

use crate::value::Kind;

/// Result type alias for formgraph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in formgraph-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A path could not be resolved against the value graph
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// JSON input could not be parsed into a value graph
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A dotted path does not fit the shape of the value graph.
///
/// Every variant carries the full path being resolved so that the message
/// points at the registration that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AddressError {
    /// A record has no field with this exact name
    #[error("unknown field {field:?} in {path:?}")]
    UnknownField {
        /// Full path being resolved
        path: String,
        /// The offending segment
        field: String,
    },

    /// A mapping has no entry for this key (read paths never create keys)
    #[error("missing key {key:?} in {path:?}")]
    MissingKey {
        /// Full path being resolved
        path: String,
        /// The offending segment
        key: String,
    },

    /// A sequence segment is not a non-negative integer
    #[error("expected a sequence index, got {segment:?} in {path:?}")]
    NotAnIndex {
        /// Full path being resolved
        path: String,
        /// The offending segment
        segment: String,
    },

    /// Growing a sequence would leave a hole
    #[error("index {index} in {path:?} would leave a gap after {len} element(s)")]
    IndexGap {
        /// Full path being resolved
        path: String,
        /// Requested index
        index: usize,
        /// Current sequence length
        len: usize,
    },

    /// Reading or removing past the end of a sequence
    #[error("index {index} in {path:?} is out of range for {len} element(s)")]
    IndexOutOfRange {
        /// Full path being resolved
        path: String,
        /// Requested index
        index: usize,
        /// Current sequence length
        len: usize,
    },

    /// The path continues below a scalar
    #[error("cannot descend into {kind} at {segment:?} in {path:?}")]
    NotAContainer {
        /// Full path being resolved
        path: String,
        /// The segment that could not be followed
        segment: String,
        /// Kind of the value found instead of a container
        kind: Kind,
    },

    /// The path continues below an optional that holds nothing
    #[error("cannot descend into an empty optional at {segment:?} in {path:?}")]
    EmptyOptional {
        /// Full path being resolved
        path: String,
        /// The segment that could not be followed
        segment: String,
    },

    /// A typed slot received a value of another kind
    #[error("cannot assign {found} where {expected} is expected at {path:?}")]
    TypeMismatch {
        /// Full path being resolved
        path: String,
        /// Kind held by the slot
        expected: Kind,
        /// Kind of the rejected value
        found: Kind,
    },

    /// A sequence operation addressed something else
    #[error("{path:?} does not address a sequence (found {kind})")]
    NotASequence {
        /// Full path being resolved
        path: String,
        /// Kind found at the path
        kind: Kind,
    },

    /// Record fields are fixed and cannot be removed
    #[error("record field {field:?} in {path:?} cannot be removed")]
    FixedField {
        /// Full path being resolved
        path: String,
        /// The field named by the last segment
        field: String,
    },
}

impl AddressError {
    /// Returns the full path that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            AddressError::UnknownField { path, .. }
            | AddressError::MissingKey { path, .. }
            | AddressError::NotAnIndex { path, .. }
            | AddressError::IndexGap { path, .. }
            | AddressError::IndexOutOfRange { path, .. }
            | AddressError::NotAContainer { path, .. }
            | AddressError::EmptyOptional { path, .. }
            | AddressError::TypeMismatch { path, .. }
            | AddressError::NotASequence { path, .. }
            | AddressError::FixedField { path, .. } => path,
        }
    }
}
