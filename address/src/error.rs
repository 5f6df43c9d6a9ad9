//! Error types for address normalization and URL joining.

use thiserror::Error;

/// Type alias for `Result` with default error [`InvalidAddress`].
pub type Result<T, E = InvalidAddress> = std::result::Result<T, E>;

/// This error is raised when a server address can not be normalized into a base URL.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("invalid address: {0}")]
pub struct InvalidAddress(pub String);

/// This error is raised when a caller-supplied argument is blank or otherwise invalid
/// (e.g. an empty dataset name, an empty query).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("validation error: {0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// Check that `value` is not empty nor made only of whitespace,
    /// and return it trimmed.
    ///
    /// `what` names the argument in the error message.
    pub fn non_blank<'a>(value: &'a str, what: &str) -> Result<&'a str, Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(ValidationError(format!("{what} must be non-empty")))
        } else {
            Ok(trimmed)
        }
    }
}
