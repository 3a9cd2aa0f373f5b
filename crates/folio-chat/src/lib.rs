//! Scripted dialogue-tree chatbot for the Folio portfolio page.
//!
//! A fixed graph of conversation nodes is walked one option at a time. The
//! [`ChatWidget`] renders bot and user bubbles into a [`MessageLog`], shows
//! the next set of option buttons, and fakes a short "thinking" pause before
//! every reply using the timers from `folio-core`.

/// Dialogue nodes, the immutable graph, and the built-in portfolio script.
pub mod dialogue;
/// Error types for the chat engine.
pub mod error;
/// Chat messages, the message log, and transcript export.
pub mod message;
/// Mapping free-form input onto displayed options.
pub mod resolver;
/// Per-session conversation state.
pub mod state;
/// The chat widget state machine.
pub mod widget;

pub use dialogue::{
    BOT_NAME, ChatOption, DialogueGraph, DialogueNode, ENTRY_NODE, GraphIssue, portfolio_graph,
};
pub use error::{ChatError, ChatResult};
pub use message::{Message, MessageLog, Sender};
pub use resolver::{resolve_option, suggest_options};
pub use state::ConversationState;
pub use widget::ChatWidget;
