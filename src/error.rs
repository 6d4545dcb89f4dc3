//! Error types for mindmark operations.

use thiserror::Error;

/// Errors that can occur while reading or writing topic trees.
///
/// The conversion core itself never fails; these only come out of the
/// archive and file layers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid XMind archive: {0}")]
    InvalidXMind(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
