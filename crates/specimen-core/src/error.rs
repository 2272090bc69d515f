use thiserror::Error;

/// Core error type shared across Specimen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Failure reading a document from disk.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by Specimen crates.
pub type Result<T> = std::result::Result<T, Error>;
