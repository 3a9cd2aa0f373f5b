use tracing::trace;

/// What kind of UI mutation occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    // Router
    /// A nav link was marked active.
    NavActivated {
        /// The section the link points at.
        section: String,
    },
    /// A section started its exit transition.
    SectionExitStarted {
        /// The leaving section.
        section: String,
    },
    /// A section became visible (its enter transition starts).
    SectionShown {
        /// The arriving section.
        section: String,
    },
    /// A section finished its enter transition.
    SectionEnterFinished {
        /// The section now at rest.
        section: String,
    },
    /// The viewport was asked to scroll to an anchor.
    ScrollRequested {
        /// The anchor inside the visible section.
        anchor: String,
    },
    /// The mobile menu was shown or hidden.
    MenuToggled {
        /// Whether the menu is now shown.
        shown: bool,
    },

    // Chat
    /// The chat window was opened.
    ChatOpened,
    /// The chat window was closed.
    ChatClosed,
    /// A message bubble was appended to the chat log.
    MessageAdded {
        /// Who authored the message ("bot" or "user").
        sender: String,
    },
    /// A node's options were rendered as buttons.
    OptionsShown {
        /// The dialogue node whose options are shown.
        node: String,
        /// How many buttons were rendered.
        count: usize,
    },
    /// The typing indicator appeared.
    TypingStarted,
    /// The typing indicator disappeared.
    TypingStopped,
    /// A reply timer fired for a target missing from the dialogue graph.
    ResponseUnresolved {
        /// The unresolvable node key.
        target: String,
    },

    // Backdrop
    /// The particle field was regenerated.
    BackdropReset {
        /// Number of particles spawned.
        particles: usize,
    },
}

impl UiEventKind {
    /// The section, node, or anchor this event is about, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::NavActivated { section }
            | Self::SectionExitStarted { section }
            | Self::SectionShown { section }
            | Self::SectionEnterFinished { section } => Some(section),
            Self::ScrollRequested { anchor } => Some(anchor),
            Self::OptionsShown { node, .. } => Some(node),
            Self::ResponseUnresolved { target } => Some(target),
            Self::MessageAdded { sender } => Some(sender),
            Self::MenuToggled { .. }
            | Self::ChatOpened
            | Self::ChatClosed
            | Self::TypingStarted
            | Self::TypingStopped
            | Self::BackdropReset { .. } => None,
        }
    }
}

/// A record of one UI mutation.
#[derive(Debug, Clone)]
pub struct UiEvent {
    /// Simulated time of the mutation in milliseconds.
    pub at_ms: u64,
    /// The specific kind of mutation.
    pub kind: UiEventKind,
    /// A human-readable description.
    pub description: String,
}

impl UiEvent {
    /// Create a new UI event.
    pub fn new(at_ms: u64, kind: UiEventKind, description: impl Into<String>) -> Self {
        Self {
            at_ms,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates UI events over a page session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<UiEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: UiEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
            trace!(dropped = drain_count, "event log at capacity");
        }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Events about the given section, node, or anchor.
    pub fn events_for(&self, subject: &str) -> Vec<&UiEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.subject() == Some(subject))
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(at_ms: u64, section: &str) -> UiEvent {
        UiEvent::new(
            at_ms,
            UiEventKind::SectionShown {
                section: section.to_string(),
            },
            format!("{section} shown"),
        )
    }

    #[test]
    fn log_push_and_query() {
        let mut log = EventLog::new(0);
        log.push(shown(0, "home"));
        log.push(shown(400, "about"));
        log.push(UiEvent::new(900, UiEventKind::ChatOpened, "chat opened"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.events_for("about").len(), 1);
        assert!(log.events_for("contact").is_empty());
    }

    #[test]
    fn log_capacity_drops_oldest() {
        let mut log = EventLog::new(2);
        log.push(shown(0, "home"));
        log.push(shown(1, "about"));
        log.push(shown(2, "projects"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].description, "about shown");
    }

    #[test]
    fn subject_of_chat_events() {
        assert_eq!(UiEventKind::ChatOpened.subject(), None);
        let kind = UiEventKind::OptionsShown {
            node: "greeting".to_string(),
            count: 3,
        };
        assert_eq!(kind.subject(), Some("greeting"));
    }
}
