use thiserror::Error;

/// Errors raised while loading, validating, or reporting user statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A backing store (database, remote API) failed.
    #[error("User source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid user record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StatsError {
    /// Wraps a backend error as a source failure.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }

    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}
