//! Error types for the issue-infographic CLI (native-only errors)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Core error: {0}")]
    Core(#[from] issue_infographic_core::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
