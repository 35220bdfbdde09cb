use super::message::Message;

/// The page the chat is rendered on: an input field and a message
/// log. Implementations own the log, nothing else appends to it.
pub trait ChatUi {
    /// Current value of the input field
    fn read_input(&self) -> String;
    fn clear_input(&mut self);
    fn append_message(&mut self, message: Message);
    /// Bring the newest message into view
    fn scroll_to_bottom(&mut self);
}
