//! Error taxonomy for engine operations.

use thiserror::Error;

/// Input or state validation failures. These never touch storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be positive (got {value})")]
    NonPositiveTarget { field: &'static str, value: i64 },
    #[error("consumption total must be non-negative (got {value})")]
    NegativeAmount { value: i64 },
    #[error("consumption total {value} exceeds supported maximum")]
    AmountOutOfRange { value: i64 },
    #[error("no active goal for user")]
    MissingGoal,
    #[error("malformed date key: {0}")]
    BadDateKey(String),
    #[error("xp-per-level step must be positive")]
    ZeroLevelStep,
}

/// Top-level failure surface of every engine operation.
///
/// Persistence failures abort the whole operation; the engine performs no
/// retries and leaves prior state unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// Surfaced by the identity layer and propagated unmodified.
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("storage failure: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl EngineError {
    /// Wrap a storage-layer error.
    pub fn persistence<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence(anyhow::Error::new(err))
    }
}
