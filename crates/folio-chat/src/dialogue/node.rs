//! Dialogue nodes and option buttons.

use serde::Serialize;

/// A single node of the conversation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueNode {
    /// Unique identifier for this node.
    pub key: String,
    /// The bot message shown when the node is entered.
    pub text: String,
    /// Buttons offered after the message, in display order.
    pub options: Vec<ChatOption>,
}

impl DialogueNode {
    /// Create a node with the given key and text and no options.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Add an option button.
    pub fn with_option(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.options.push(ChatOption::new(label, target));
        self
    }

    /// A node without options ends the conversation.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

/// A selectable button pointing at another node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatOption {
    /// The text on the button, echoed as the user's message.
    pub label: String,
    /// Key of the node the bot answers with.
    pub target: String,
}

impl ChatOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}
