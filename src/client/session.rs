//! Wires a `ChatUi` to a `QueryBackend`. Sending captures the input
//! synchronously and resolves the reply on its own task; replies come
//! back over a channel so only the UI loop ever touches the log.
//!
//! Requests are independent. If a later query resolves first its
//! reply is appended first.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::dispatch::{QueryBackend, reply_for};
use super::message::Message;
use super::ui::ChatUi;

/// Append a message and keep it in view
pub fn deliver<U: ChatUi>(ui: &mut U, message: Message) {
    ui.append_message(message);
    ui.scroll_to_bottom();
}

/// Read the input field and echo it to the log. Returns the raw,
/// untrimmed text, or `None` if the input is blank in which case the
/// UI is left untouched.
pub fn capture<U: ChatUi>(ui: &mut U) -> Option<String> {
    let input = ui.read_input();
    if input.trim().is_empty() {
        return None;
    }

    deliver(ui, Message::user(&input));
    ui.clear_input();

    Some(input)
}

pub struct ChatSession {
    backend: Arc<dyn QueryBackend>,
    replies: mpsc::UnboundedSender<Message>,
}

impl ChatSession {
    /// Create a session along with the receiver that yields bot
    /// replies in the order they resolve.
    pub fn new(backend: Arc<dyn QueryBackend>) -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            backend,
            replies: tx,
        };
        (session, rx)
    }

    /// Handle a send action. Returns the handle of the spawned
    /// request, or `None` when the input was blank.
    pub fn send<U: ChatUi>(&self, ui: &mut U) -> Option<JoinHandle<()>> {
        let text = capture(ui)?;
        let backend = Arc::clone(&self.backend);
        let tx = self.replies.clone();

        let handle = tokio::spawn(async move {
            let reply = reply_for(backend.as_ref(), &text).await;
            if tx.send(reply).is_err() {
                // The UI went away while the request was in flight
                tracing::debug!("Dropping reply, chat session closed");
            }
        });

        Some(handle)
    }
}
