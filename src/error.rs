//! Error types for pathpick.
//!
//! Only loading tree data and configuration can fail. The picker engine
//! itself treats unknown or excluded paths as no-ops.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading picker input.
#[derive(Error, Debug)]
pub enum PickerError {
    /// An I/O error occurred while reading a file
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Tree data was not valid JSON or did not match the node shape
    #[error("invalid tree data in {path}: {source}")]
    InvalidTree {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for pathpick operations.
pub type Result<T> = std::result::Result<T, PickerError>;
