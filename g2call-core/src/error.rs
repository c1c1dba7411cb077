//! Error types for g2call-core

/// Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Protocol-layer errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Body declared as JSON but not parseable as the expected shape
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
