use thiserror::Error;

/// Error type that captures failures at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Snapshot `{0}` not found")]
    Missing(String),
    #[error("Malformed amount: `{0}`")]
    MalformedAmount(String),
}
