use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database rejected a query.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// No connection could be taken from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A stored record does not satisfy the domain invariants.
    #[error("stored data is invalid: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repositories.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
