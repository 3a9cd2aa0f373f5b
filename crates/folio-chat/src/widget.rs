//! The chat widget: a timer-driven walk over the dialogue graph.

use folio_core::{
    Component, FrameContext, TimerHandle, TimingConfig, Timers, UiEvent, UiEventKind,
};
use tracing::{debug, warn};

use crate::dialogue::{ChatOption, DialogueGraph};
use crate::error::{ChatError, ChatResult};
use crate::message::{MessageLog, Sender};
use crate::resolver::{resolve_option, suggest_options};
use crate::state::ConversationState;

/// A deferred widget action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatAction {
    /// Render the entry node.
    Greet,
    /// Answer a selection with the target node.
    Reply { target: String },
}

/// The chatbot widget.
///
/// Opening the widget the first time schedules the greeting. Every selection
/// echoes the button label as a user bubble, hides the buttons, shows the
/// typing indicator, and schedules the bot's reply. Nothing is selectable
/// until that reply lands.
#[derive(Debug)]
pub struct ChatWidget {
    graph: DialogueGraph,
    greeting_delay_ms: u64,
    reply_delay_ms: u64,
    state: ConversationState,
    messages: MessageLog,
    options: Vec<ChatOption>,
    timers: Timers<ChatAction>,
    outbox: Vec<UiEvent>,
}

impl ChatWidget {
    /// Create a closed widget over the given graph.
    pub fn new(graph: DialogueGraph, timing: &TimingConfig) -> Self {
        Self {
            graph,
            greeting_delay_ms: timing.greeting_delay_ms,
            reply_delay_ms: timing.reply_delay_ms,
            state: ConversationState::new(),
            messages: MessageLog::new(),
            options: Vec::new(),
            timers: Timers::new(),
            outbox: Vec::new(),
        }
    }

    /// The conversation graph.
    pub fn graph(&self) -> &DialogueGraph {
        &self.graph
    }

    /// The conversation state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Every bubble rendered so far.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// The option buttons currently displayed.
    pub fn options(&self) -> &[ChatOption] {
        &self.options
    }

    /// Whether the window is expanded.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Whether a reply is pending.
    pub fn is_awaiting(&self) -> bool {
        self.state.is_awaiting_response
    }

    /// Whether the typing indicator is visible.
    pub fn is_typing(&self) -> bool {
        self.state.is_typing
    }

    /// Key of the last rendered node.
    pub fn current_node(&self) -> Option<&str> {
        self.state.current_node.as_deref()
    }

    /// Whether the conversation reached a node without options.
    pub fn is_finished(&self) -> bool {
        !self.state.is_awaiting_response
            && self
                .current_node()
                .and_then(|key| self.graph.get(key))
                .is_some_and(|node| node.is_terminal())
    }

    /// Expand the window, scheduling the greeting on first open.
    pub fn open(&mut self) {
        if self.state.is_open {
            return;
        }
        self.state.is_open = true;
        self.record(UiEventKind::ChatOpened, "chat opened");

        if !self.state.started {
            self.state.started = true;
            let handle = self.timers.schedule(self.greeting_delay_ms, ChatAction::Greet);
            debug!(%handle, delay_ms = self.greeting_delay_ms, "greeting scheduled");
        }
    }

    /// Collapse the window. Conversation state and pending replies are kept.
    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        self.state.is_open = false;
        self.record(UiEventKind::ChatClosed, "chat closed");
    }

    /// The chat toggle button.
    pub fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Pick the displayed button with this label and target.
    pub fn select_option(&mut self, label: &str, target: &str) -> ChatResult<TimerHandle> {
        self.ensure_accepts_input()?;
        if !self
            .options
            .iter()
            .any(|o| o.label == label && o.target == target)
        {
            return Err(ChatError::OptionNotOffered {
                label: label.to_string(),
                target: target.to_string(),
            });
        }

        self.messages.push(Sender::User, label);
        self.record(
            UiEventKind::MessageAdded {
                sender: Sender::User.to_string(),
            },
            format!("user: {label}"),
        );
        self.options.clear();

        self.state.is_awaiting_response = true;
        self.state.is_typing = true;
        self.record(UiEventKind::TypingStarted, "typing indicator shown");

        let handle = self.timers.schedule(
            self.reply_delay_ms,
            ChatAction::Reply {
                target: target.to_string(),
            },
        );
        debug!(%handle, node = target, "reply scheduled");
        Ok(handle)
    }

    /// Pick the displayed button at `index` (0-based).
    pub fn select_index(&mut self, index: usize) -> ChatResult<TimerHandle> {
        self.ensure_accepts_input()?;
        let option = self
            .options
            .get(index)
            .cloned()
            .ok_or(ChatError::InvalidChoice(index))?;
        self.select_option(&option.label, &option.target)
    }

    /// Pick a button from typed input: a number, a label, or something close to one.
    pub fn select_input(&mut self, input: &str) -> ChatResult<TimerHandle> {
        self.ensure_accepts_input()?;
        let index = resolve_option(&self.options, input)
            .ok_or_else(|| ChatError::UnknownInput(input.to_string()))?;
        self.select_index(index)
    }

    /// Up to `limit` displayed labels resembling `partial`, best first.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<&str> {
        suggest_options(&self.options, partial, limit)
    }

    fn ensure_accepts_input(&self) -> ChatResult<()> {
        if self.state.accepts_input() {
            Ok(())
        } else if !self.state.is_open {
            Err(ChatError::WidgetClosed)
        } else {
            Err(ChatError::AwaitingResponse)
        }
    }

    /// Fire every timer due at or before `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some((handle, action)) = self.timers.pop_due(now_ms) {
            debug!(%handle, ?action, "chat timer fired");
            self.fire(action);
        }
        self.timers.settle(now_ms);
    }

    /// Take buffered UI events.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn fire(&mut self, action: ChatAction) {
        match action {
            ChatAction::Greet => {
                let key = self.graph.entry().key.clone();
                self.render_node(&key);
            }
            ChatAction::Reply { target } => {
                self.state.is_typing = false;
                self.record(UiEventKind::TypingStopped, "typing indicator hidden");

                if self.graph.contains(&target) {
                    self.render_node(&target);
                    self.state.is_awaiting_response = false;
                } else {
                    warn!(node = %target, "dialogue target does not exist; conversation stalled");
                    self.record(
                        UiEventKind::ResponseUnresolved {
                            target: target.clone(),
                        },
                        format!("no dialogue node '{target}'"),
                    );
                }
            }
        }
    }

    fn render_node(&mut self, key: &str) {
        let Some(node) = self.graph.get(key).cloned() else {
            return;
        };

        self.messages.push(Sender::Bot, node.text.as_str());
        self.record(
            UiEventKind::MessageAdded {
                sender: Sender::Bot.to_string(),
            },
            format!("bot: {}", node.key),
        );

        self.state.current_node = Some(node.key.clone());
        self.options = node.options;
        self.record(
            UiEventKind::OptionsShown {
                node: node.key.clone(),
                count: self.options.len(),
            },
            format!("{} option(s) for {}", self.options.len(), node.key),
        );
    }

    fn record(&mut self, kind: UiEventKind, description: impl Into<String>) {
        self.outbox
            .push(UiEvent::new(self.timers.now_ms(), kind, description));
    }
}

impl Component for ChatWidget {
    fn name(&self) -> &str {
        "chat"
    }

    fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        self.advance_to(ctx.now_ms());
        ctx.publish(&mut self.outbox);
    }

    fn next_due(&self) -> Option<u64> {
        self.timers.next_due()
    }
}
