//! Error types for the core crate.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while parsing or validating core value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The color string could not be understood.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A `key=value` pair was malformed.
    #[error("Invalid property '{0}': expected key=value")]
    InvalidPropertyPair(String),

    /// A property key was empty.
    #[error("Property name cannot be empty")]
    EmptyPropertyName,
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
