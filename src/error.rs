//! Error types for rpc-providers-gen

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Provider spec parsing errors
    #[error("Provider spec error: {0}")]
    Spec(#[from] SpecError),

    /// Output writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Provider-spec parsing errors
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Empty provider spec. Use provider, provider:token or provider:login:password format")]
    Empty,
}

/// Output-related errors
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output file {path}: {source}")]
    FileCreate {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
