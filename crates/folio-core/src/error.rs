//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating page configuration.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A timing value is outside its accepted range.
    #[error("invalid timing for {field}: {value} ms")]
    InvalidTiming {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// A backdrop parameter is outside its accepted range.
    #[error("invalid backdrop setting {field}: {reason}")]
    InvalidBackdrop {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The default section name is empty.
    #[error("default section must not be empty")]
    EmptyDefaultSection,
}
