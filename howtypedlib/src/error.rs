//! Error types for howtypedlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a project
#[derive(Error, Debug)]
pub enum HowTypedError {
    /// Failed to list the scan root
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
