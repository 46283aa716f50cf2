use super::{ConversationLog, Message};
use crate::error::{HelloError, Result};
use crate::router::IntentRouter;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Drives one conversation: a single router, a single log, and at most one
/// submission in flight.
pub struct Conversation {
    router: IntentRouter,
    log: Arc<ConversationLog>,
    in_flight: Mutex<()>,
}

impl Conversation {
    pub fn new(router: IntentRouter) -> Self {
        Self {
            router,
            log: Arc::new(ConversationLog::new()),
            in_flight: Mutex::new(()),
        }
    }

    pub fn with_log(mut self, log: Arc<ConversationLog>) -> Self {
        self.log = log;
        self
    }

    pub fn log(&self) -> &Arc<ConversationLog> {
        &self.log
    }

    /// Route `input` and record the exchange.
    ///
    /// Fails with [`HelloError::Busy`] if an earlier submission has not
    /// finished; nothing is appended in that case. Blank input is not echoed
    /// into the log, but its validation reply is.
    pub async fn submit(&self, input: &str) -> Result<Message> {
        let _guard = self.in_flight.try_lock().map_err(|_| {
            tracing::debug!("Rejected submission while another is pending");
            HelloError::Busy
        })?;

        if !input.trim().is_empty() {
            self.log.append(Message::user(input));
        }

        let reply = self.router.route(input).await;
        Ok(self.log.append(reply))
    }
}
