use thiserror::Error;

/// Failures surfaced by the user service and its repositories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Input rejected before reaching storage; the message is client-safe.
    #[error("{0}")]
    Validation(String),

    #[error("user not found")]
    NotFound,

    /// Opaque backing-store failure. Never shown to clients.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;
