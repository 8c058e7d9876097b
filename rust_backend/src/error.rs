//! Error types for the zone engine.

use crate::authority::AuthorityError;
use crate::db::repository::RepositoryError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Time authority error: {0}")]
    Authority(#[from] AuthorityError),

    #[error("Cache store error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Invalid timeline width {0}: must be even and greater than zero")]
    InvalidWidth(usize),

    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}
