//! Error types and handling for rs2-iter
//!
//! Combinators never interpret errors, they only carry them from the source
//! that produced them up to the caller. Errors are therefore cheap to clone:
//! a single failure is shared by a grouper and every group it handed out.

use std::io;
use thiserror::Error;

/// Main error type for iteration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterError {
    /// I/O error raised by a reader-backed source
    #[error("I/O error: {message}")]
    Io { kind: io::ErrorKind, message: String },
    /// Iteration failed in a user supplied source
    #[error("iteration failed: {0}")]
    Custom(String),
    /// An iterator could not be constructed from the given arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A pending buffer grew past its configured limit
    #[error("pending buffer overflow: more than {limit} values queued")]
    BufferOverflow { limit: usize },
}

impl IterError {
    /// Shorthand for [`IterError::Custom`].
    pub fn custom(msg: impl Into<String>) -> Self {
        IterError::Custom(msg.into())
    }
}

impl From<io::Error> for IterError {
    fn from(err: io::Error) -> Self {
        IterError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IterError {
    fn from(err: serde_json::Error) -> Self {
        IterError::InvalidArgument(err.to_string())
    }
}

/// Result type for rs2-iter operations
pub type IterResult<T> = Result<T, IterError>;

/// Error returned by draining terminals: the values collected before the
/// source failed, together with the failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct Partial<C> {
    pub partial: C,
    #[source]
    pub error: IterError,
}

impl<C> Partial<C> {
    pub fn new(partial: C, error: IterError) -> Self {
        Self { partial, error }
    }

    /// Split into the partial result and the error.
    pub fn into_parts(self) -> (C, IterError) {
        (self.partial, self.error)
    }
}

impl<C> From<Partial<C>> for IterError {
    fn from(p: Partial<C>) -> Self {
        p.error
    }
}

/// Turn an accumulated value and an optional error into a terminal result.
pub(crate) fn finish<C>(acc: C, error: Option<IterError>) -> Result<C, Partial<C>> {
    match error {
        None => Ok(acc),
        Some(error) => Err(Partial::new(acc, error)),
    }
}
