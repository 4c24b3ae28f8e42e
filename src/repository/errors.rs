use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A value failed domain validation on its way in or out of a backend.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
