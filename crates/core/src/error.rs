//! Error types for issue-infographic-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for issue-infographic-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset contains no issue records")]
    EmptyDataset,

    #[error("Duplicate issue id: {0}")]
    DuplicateId(String),

    #[error("Invalid prevalence for '{id}': {value}")]
    InvalidPrevalence { id: String, value: String },

    #[error("Unknown severity tier: {0}")]
    UnknownSeverity(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
