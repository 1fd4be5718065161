//! Error types for kana-drill-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when item input fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}
