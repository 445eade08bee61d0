//! Error types for lexiprep.
//!
//! Text processing itself never fails. Everything here is raised while the
//! resources and config are being prepared, before any text is seen.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    /// A stopword list or lexicon file could not be found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(PathBuf),

    /// A resource was readable but its contents are unusable.
    #[error("Malformed resource {name}: {reason}")]
    MalformedResource { name: String, reason: String },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PrepResult<T> = std::result::Result<T, PrepError>;
