use crate::openai::{Message, Role};

/// Transcript for a single question. The retrieved context goes in
/// a trailing system message so the instruction stays first.
pub fn transcript(system_message: &str, query: &str, context: &str) -> Vec<Message> {
    vec![
        Message::new(Role::System, system_message),
        Message::new(Role::User, query),
        Message::new(Role::System, context),
    ]
}
