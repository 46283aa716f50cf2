use super::Message;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::mpsc;

#[derive(Default)]
struct LogState {
    messages: Vec<Message>,
    subscribers: Vec<mpsc::UnboundedSender<Message>>,
}

/// Append-only, ordered record of a conversation.
///
/// The display layer either polls [`ConversationLog::messages`] or holds a
/// receiver from [`ConversationLog::subscribe`].
#[derive(Default)]
pub struct ConversationLog {
    state: Mutex<LogState>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stamp the next sequence number onto `message`, store it and notify
    /// subscribers. Returns the stored copy.
    pub fn append(&self, message: Message) -> Message {
        let mut state = self.lock();
        let message = message.sequenced(state.messages.len() as u64);
        state.messages.push(message.clone());
        state
            .subscribers
            .retain(|tx| tx.send(message.clone()).is_ok());
        message
    }

    /// Receive every message appended from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().subscribers.push(tx);
        rx
    }

    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock().messages.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().messages.is_empty()
    }
}
