//! Error handling for the Lantern binding generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! A missing start marker is not an error: it is
//! reported as [`RewriteOutcome::MarkerNotFound`](crate::rewrite::RewriteOutcome)
//! and never aborts a run.
//!
//! # Examples
//!
//! ```
//! use lanterngen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::schema("entry 0: missing field \"name\""))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for Lantern generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Lantern generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Declarations schema is absent or structurally invalid
    #[error("Schema error: {0}")]
    Schema(String),

    /// A target file could not be read or written
    #[error("Failed to access target file {}: {source}", .path.display())]
    TargetFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Start marker found but no end marker after it (strict policy only)
    #[error("End marker {marker:?} not found after start marker in {}", .path.display())]
    MissingEndMarker { path: PathBuf, marker: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Wrap an I/O failure on a target file
    pub fn target_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TargetFile {
            path: path.into(),
            source,
        }
    }
}
