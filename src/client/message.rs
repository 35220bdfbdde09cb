use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single entry in the chat transcript. Fields are private so a
/// message can't change after it was appended to a log.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub fn new(sender: Sender, text: &str) -> Self {
        Message {
            sender,
            text: text.to_string(),
        }
    }

    pub fn user(text: &str) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: &str) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only transcript. Display order is insertion order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serializes_lowercase() {
        let msg = Message::bot("Hi!");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"sender":"bot","text":"Hi!"}"#);
        assert_eq!(Sender::User.to_string(), "user");
    }

    #[test]
    fn test_log_keeps_append_order() {
        let mut log = MessageLog::new();
        assert!(log.is_empty());

        log.push(Message::user("a"));
        log.push(Message::user("a"));
        log.push(Message::bot("b"));

        // No deduplication of identical messages
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.messages(),
            &[Message::user("a"), Message::user("a"), Message::bot("b")]
        );
        assert_eq!(log.last(), Some(&Message::bot("b")));
    }
}
