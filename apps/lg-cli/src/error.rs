//! Error types for the lg-cli frontend.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read input file: {path}")]
    InputFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Conversion error: {0}")]
    Convert(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lg-cli operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<lg_graph::GraphError> for AppError {
    fn from(err: lg_graph::GraphError) -> Self {
        AppError::Convert(err.to_string())
    }
}

impl From<lg_core::LgError> for AppError {
    fn from(err: lg_core::LgError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
