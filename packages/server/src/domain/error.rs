//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// SessionId validation error
    #[error("SessionId cannot be empty")]
    SessionIdEmpty,

    /// SessionId invalid format error (not a valid UUID format)
    #[error("SessionId must be a valid UUID format (got: {0})")]
    SessionIdInvalidFormat(String),

    /// Position payload did not split into three numeric components
    #[error("Position must be three comma-separated numbers (got: {0})")]
    PositionInvalidFormat(String),

    /// Position components must be finite (no NaN or infinity)
    #[error("Position components must be finite (got: {0})")]
    PositionNotFinite(String),

    /// Color validation error
    #[error("Color must fit in 24 bits (got: {0:#x})")]
    ColorOutOfRange(u32),
}

/// Errors returned by the world repository
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Two live sessions may never share an id. With uuid-v4 generation
    /// this is an internal invariant violation, not a user-facing error.
    #[error("session '{0}' is already registered")]
    DuplicateSession(String),
}
