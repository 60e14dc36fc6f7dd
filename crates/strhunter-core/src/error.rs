//! The library's error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can fail. Decode failures are not represented here: they are
/// an expected per-literal `Option::None`, never an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid predicate or skip-file regular expression; fatal, raised before
    /// any traversal starts.
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    /// Unreadable or invalid TOML config file; fatal.
    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// tree-sitter produced no tree or a tree containing error nodes.
    #[error("parse error in {} at line {line}", .path.display())]
    Parse { path: PathBuf, line: usize },

    /// File I/O failure while reading a source file.
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unrecognized output format name.
    #[error("unknown output format: {0}")]
    Format(String),

    /// Report-writing I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure while writing the report.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
