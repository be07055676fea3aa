use thiserror::Error;

/// Error type that captures gateway and engine failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Journal entry `{0}` not found")]
    NotFound(uuid::Uuid),
}

pub type Result<T> = std::result::Result<T, EngineError>;
