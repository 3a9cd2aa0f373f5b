//! Error types for the chat engine.

use thiserror::Error;

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur while building a dialogue graph or using the widget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Two nodes share the same key.
    #[error("duplicate dialogue node: {0}")]
    DuplicateNode(String),

    /// The entry node is not part of the graph.
    #[error("entry node not found: {0}")]
    MissingEntry(String),

    /// Input arrived while the chat window is closed.
    #[error("chat window is closed")]
    WidgetClosed,

    /// Input arrived while a bot reply is pending.
    #[error("waiting for a reply")]
    AwaitingResponse,

    /// The selected option is not among the displayed buttons.
    #[error("option not offered: {label} -> {target}")]
    OptionNotOffered {
        /// Button label that was selected.
        label: String,
        /// Node key the button points at.
        target: String,
    },

    /// Option index out of range.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// Free-form input matched no displayed option.
    #[error("no option matches: {0}")]
    UnknownInput(String),
}
