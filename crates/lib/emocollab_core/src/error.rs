//! Domain error types.

use thiserror::Error;

/// Errors raised while interpreting chat lookup input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
}
