use crate::error::HelloError;
use serde::{Deserialize, Serialize};

/// One documentation search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocResult {
    pub summary: String,
    pub url: String,
}

impl DocResult {
    pub fn new(summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            url: url.into(),
        }
    }
}

/// Remote documentation search. An empty list is a valid answer, not an error.
#[async_trait::async_trait]
pub trait DocSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<DocResult>, HelloError>;
}

/// Remote text completion. Fails with `Transport` or `Auth`.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, HelloError>;
}
