mod log;
mod message;
mod session;

pub use log::ConversationLog;
pub use message::{Message, Sender};
pub use session::Conversation;
