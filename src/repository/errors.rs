use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by the record store.
///
/// The message of the underlying error is preserved so callers can attach it
/// to their diagnostics; it never contains credentials.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row no longer satisfies domain constraints.
    #[error("stored record is invalid: {0}")]
    Constraint(#[from] TypeConstraintError),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
