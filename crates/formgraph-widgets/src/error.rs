//! Error types for formgraph-widgets.
//!
//! Everything here is fatal: a misconfigured widget or form, or a registered
//! path that does not fit the data graph. Validation failures caused by user
//! input are not errors; they are collected on the widget and surface in the
//! render tree.

use std::path::PathBuf;

use formgraph_core::AddressError;

/// Errors that can occur while building, filling or rendering a form.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from the value graph layer
    #[error(transparent)]
    Core(#[from] formgraph_core::Error),

    /// A registered widget id does not resolve against the data graph
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// A text or password pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Widget or form setup is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// What is misconfigured
        message: String,
    },

    /// Settings file could not be read
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`FormSettings`](crate::FormSettings)
    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    /// A raw submission body could not be decoded
    #[error("Submission error: {message}")]
    Submission {
        /// What could not be decoded
        message: String,
    },
}

/// Result type alias for formgraph-widgets operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error that remembers the file involved.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new submission decoding error.
    pub fn submission<S: Into<String>>(message: S) -> Self {
        Error::Submission {
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by a path that does not fit the
    /// data graph.
    pub fn is_address(&self) -> bool {
        matches!(
            self,
            Error::Address(_) | Error::Core(formgraph_core::Error::Address(_))
        )
    }
}
