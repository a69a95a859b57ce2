//! Error types for table and configuration loading.
//!
//! Translation itself never fails. Everything here is raised while building
//! an engine, before any text is processed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure to load a rule table, vocabulary or configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// A table or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML.
    #[error("malformed table: {0}")]
    Toml(#[from] toml::de::Error),

    /// A rule entry is unusable (empty pattern, duplicate pattern, ...).
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Building an FST vocabulary set failed.
    #[error("vocabulary build failed: {0}")]
    Fst(#[from] fst::Error),
}

impl LoadError {
    /// Create an I/O error bound to the path that failed.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid rule error.
    #[must_use]
    pub fn invalid_rule(msg: impl Into<String>) -> Self {
        Self::InvalidRule(msg.into())
    }

    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Read a file to a string, attaching the path to any I/O error.
pub fn read_to_string<P: AsRef<std::path::Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}
