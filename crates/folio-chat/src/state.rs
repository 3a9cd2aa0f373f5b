//! Per-session conversation state.

/// Transient state of one chat widget. Lives until the page is reloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    /// Key of the last rendered node; unset until the greeting appears.
    pub current_node: Option<String>,
    /// Whether the chat window is expanded.
    pub is_open: bool,
    /// True between a selection and the bot's reply.
    pub is_awaiting_response: bool,
    /// Whether the typing indicator is visible.
    pub is_typing: bool,
    /// Whether the greeting has been scheduled.
    pub started: bool,
}

impl ConversationState {
    /// Create the state of a never-opened widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user may pick an option right now.
    pub fn accepts_input(&self) -> bool {
        self.is_open && !self.is_awaiting_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let state = ConversationState::new();
        assert!(state.current_node.is_none());
        assert!(!state.is_open);
        assert!(!state.started);
        assert!(!state.accepts_input());
    }

    #[test]
    fn awaiting_blocks_input() {
        let state = ConversationState {
            is_open: true,
            is_awaiting_response: true,
            ..ConversationState::default()
        };
        assert!(!state.accepts_input());

        let state = ConversationState {
            is_awaiting_response: false,
            ..state
        };
        assert!(state.accepts_input());
    }
}
