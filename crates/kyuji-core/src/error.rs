// crates/kyuji-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KyujiError>;

#[derive(Debug, Error)]
pub enum KyujiError {
    /// Dictionary artifact is missing, truncated, corrupted or of an unknown version.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// JSON source dictionary is well-formed JSON but not a valid record set.
    #[error("source dictionary error: {0}")]
    Source(String),

    /// A streaming endpoint that cannot be used; reported before any I/O.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
