use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for annotation operations
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The search root does not exist or is not a directory
    #[error("Invalid search root {path}: not a directory\n\nTip: pass the project directory that contains your translation catalog")]
    InvalidRoot { path: PathBuf },

    /// Failed to read the catalog file
    #[error("Failed to read catalog file {file}:\n{reason}")]
    CatalogReadError { file: PathBuf, reason: String },

    /// Failed to parse the catalog file
    #[error("Failed to parse catalog file {file}:\n{reason}\n\nTip: the catalog must be a flat JSON object of string keys to string values")]
    CatalogParseError { file: PathBuf, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnnotateError {
    /// Create an InvalidRoot error
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot { path: path.into() }
    }

    /// Create a CatalogReadError from a file path and reason
    pub fn catalog_read_error(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CatalogReadError {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a CatalogParseError from a file path and reason
    pub fn catalog_parse_error(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CatalogParseError {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for AnnotateError
pub type Result<T> = std::result::Result<T, AnnotateError>;
