mod file;
mod memory;

pub use file::FileSnippetStore;
pub use memory::MemorySnippetStore;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A named, user-persisted text blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Name as last entered by the user; lookups go through [`normalize_key`].
    pub name: String,
    pub content: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Storage key for a user-entered snippet name or static trigger.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keyed snippet persistence. Every operation is atomic with respect to the
/// others on the same store.
pub trait SnippetStore: Send + Sync {
    /// Insert or overwrite. Only fails if the persistence medium does, in
    /// which case the previous state is kept.
    fn save(&self, name: &str, content: &str) -> Result<()>;

    fn fetch(&self, name: &str) -> Option<String>;

    /// Returns whether a snippet was removed. Missing keys are not an error.
    fn delete(&self, name: &str) -> Result<bool>;

    /// All snippets, ordered by normalized key.
    fn list_all(&self) -> Vec<Snippet>;

    fn clear(&self) -> Result<()>;
}
