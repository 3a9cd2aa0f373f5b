//! Error types for page components.

use thiserror::Error;

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur while building or driving the page.
#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    /// No section has this identifier.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// No nav link at this position.
    #[error("unknown nav link: {0}")]
    UnknownLink(usize),

    /// The layout has no sections at all.
    #[error("page layout has no sections")]
    NoSections,

    /// Chat widget error.
    #[error("{0}")]
    Chat(#[from] folio_chat::ChatError),

    /// Configuration error.
    #[error("{0}")]
    Config(#[from] folio_core::CoreError),
}
