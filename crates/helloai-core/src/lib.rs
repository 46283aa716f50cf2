pub mod error;
pub mod constants;
pub mod config;
pub mod conversation;
pub mod snippets;
pub mod tables;
pub mod remote;
pub mod router;

// Re-export key types
pub use error::{HelloError, Result};
pub use config::Settings;
pub use conversation::{Conversation, ConversationLog, Message, Sender};
pub use snippets::{normalize_key, FileSnippetStore, MemorySnippetStore, Snippet, SnippetStore};
pub use tables::{StaticEntry, StaticTables};
pub use remote::{CompletionClient, DocResult, DocSearch, MdnSearchClient, OpenAICompletionClient};
pub use router::{Intent, IntentRouter};
