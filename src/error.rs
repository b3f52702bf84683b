use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading input lines or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
