use thiserror::Error;

pub type Result<T> = std::result::Result<T, VitrineError>;

#[derive(Debug, Error)]
pub enum VitrineError {
    /// Network or HTTP failure talking to a backend service.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A catalog source failed for a non-transport reason (missing record,
    /// simulated outage in tests).
    #[error("catalog source error: {0}")]
    Source(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A filter value the user supplied could not be understood, e.g. a
    /// malformed price band token.
    #[error("invalid filter value: {0}")]
    InvalidFilterValue(String),
}
