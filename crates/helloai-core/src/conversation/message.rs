use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One exchanged line. Never changes after it has been built; the log hands
/// out a sequenced copy on append.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
    sequence: u64,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            sequence: 0,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn sequenced(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Position in the conversation. Zero until the message is appended.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = Message::user("hi");
        assert_eq!(user.text(), "hi");
        assert_eq!(user.sender(), Sender::User);
        assert_eq!(user.sequence(), 0);

        let bot = Message::bot("hello");
        assert!(bot.is_bot());
    }

    #[test]
    fn test_timestamp_set_at_creation() {
        let before = Utc::now();
        let msg = Message::user("hi");
        assert!(msg.timestamp() >= before);
        assert!(msg.timestamp() <= Utc::now());
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_value(Message::bot("x")).unwrap();
        assert_eq!(json["sender"], "bot");
    }
}
