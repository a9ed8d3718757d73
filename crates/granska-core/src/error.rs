use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GranskaError {
    #[error("failed to load taxonomy from {path}: {reason}")]
    TaxonomyLoad { path: PathBuf, reason: String },

    #[error("invalid taxonomy: {0}")]
    TaxonomyInvalid(String),

    #[error("failed to load lookup tables from {path}: {reason}")]
    TablesLoad { path: PathBuf, reason: String },

    #[error("invalid lookup tables: {0}")]
    TablesInvalid(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("language analysis failed ({backend}): {reason}")]
    Language { backend: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
