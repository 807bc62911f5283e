use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Lookup failure and password mismatch share one message so a caller
    /// cannot probe which accounts exist.
    #[error("invalid email/username or password")]
    InvalidCredentials,
    /// The credentials were valid but the account is not an administrator.
    #[error("access denied: not an administrator")]
    NotAnAdmin,
    /// The session claim did not survive re-validation against the store.
    #[error("unauthorized")]
    Unauthorized,
    /// The submitted data failed form or type validation.
    #[error("{0}")]
    Validation(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The record store failed; carries its message for the response body.
    #[error("{0}")]
    Repository(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
