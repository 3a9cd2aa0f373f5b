//! Chat messages and transcript export.

use serde::Serialize;

/// Who authored a chat bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The scripted assistant.
    Bot,
    /// The visitor clicking option buttons.
    User,
}

impl Sender {
    /// Lowercase name, as used in CSS classes and events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Author of the bubble.
    pub sender: Sender,
    /// Bubble text.
    pub text: String,
}

/// Ordered log of every bubble rendered in a session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bubble after all prior ones.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message {
            sender,
            text: text.into(),
        });
    }

    /// All bubbles, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent bubble.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of bubbles from the given sender.
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }

    /// Number of bubbles.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Export the conversation as markdown.
    pub fn export_markdown(&self, bot_name: &str) -> String {
        let mut out = String::from("# Chat Transcript\n\n");
        for message in &self.messages {
            match message.sender {
                Sender::Bot => {
                    out.push_str(&format!("**{bot_name}**: {}\n\n", message.text));
                }
                Sender::User => {
                    out.push_str(&format!("> {}\n\n", message.text));
                }
            }
        }
        out
    }

    /// Export the conversation as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> MessageLog {
        let mut log = MessageLog::new();
        log.push(Sender::Bot, "Hello.");
        log.push(Sender::User, "View Contact Info");
        log.push(Sender::Bot, "Contact via email.");
        log
    }

    #[test]
    fn push_keeps_order() {
        let log = sample_log();
        assert_eq!(log.len(), 3);
        assert_eq!(log.messages()[1].sender, Sender::User);
        assert_eq!(log.last().unwrap().text, "Contact via email.");
        assert_eq!(log.count_from(Sender::Bot), 2);
        assert_eq!(log.count_from(Sender::User), 1);
    }

    #[test]
    fn empty_log() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn sender_names() {
        assert_eq!(Sender::Bot.to_string(), "bot");
        assert_eq!(Sender::User.as_str(), "user");
    }

    #[test]
    fn markdown_transcript() {
        let log = sample_log();
        insta::assert_snapshot!(log.export_markdown("And-droid").trim_end(), @r"
        # Chat Transcript

        **And-droid**: Hello.

        > View Contact Info

        **And-droid**: Contact via email.
        ");
    }

    #[test]
    fn json_transcript() {
        let mut log = MessageLog::new();
        log.push(Sender::User, "Hi");
        let json = log.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["sender"], "user");
        assert_eq!(value[0]["text"], "Hi");
    }
}
