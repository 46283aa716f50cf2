mod intent;

pub use intent::Intent;

use crate::config::Settings;
use crate::constants::{defaults, limits, prompts, replies};
use crate::conversation::Message;
use crate::error::{HelloError, Result};
use crate::remote::{CompletionClient, DocSearch};
use crate::snippets::SnippetStore;
use crate::tables::StaticTables;
use std::sync::Arc;

/// Turns one line of user input into one bot reply.
///
/// Every collaborator is injected, and every failure becomes a bot message:
/// `route` has no error path.
pub struct IntentRouter {
    tables: StaticTables,
    store: Arc<dyn SnippetStore>,
    docs: Arc<dyn DocSearch>,
    completion: Arc<dyn CompletionClient>,
    max_input_chars: usize,
    max_tokens: u32,
    review_max_tokens: u32,
}

impl IntentRouter {
    pub fn new(
        store: Arc<dyn SnippetStore>,
        docs: Arc<dyn DocSearch>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            tables: StaticTables::builtin(),
            store,
            docs,
            completion,
            max_input_chars: limits::MAX_INPUT_CHARS,
            max_tokens: defaults::MAX_TOKENS,
            review_max_tokens: defaults::REVIEW_MAX_TOKENS,
        }
    }

    /// Wire up the file store and the HTTP clients described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let router = Self::new(
            settings.build_snippet_store()?,
            settings.build_doc_search()?,
            settings.build_completion_client()?,
        )
        .with_settings(settings);
        Ok(router)
    }

    pub fn with_tables(mut self, tables: StaticTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.max_input_chars = settings.router.max_input_chars;
        self.max_tokens = settings.completion.max_tokens;
        self.review_max_tokens = settings.completion.review_max_tokens;
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn validate(&self, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Err(HelloError::Validation(replies::EMPTY_INPUT.to_string()));
        }
        let len = input.chars().count();
        if len > self.max_input_chars {
            return Err(HelloError::Validation(format!(
                "Your message is {} characters long. Please keep it to {} characters or fewer.",
                len, self.max_input_chars
            )));
        }
        Ok(())
    }

    pub fn classify<'a>(&self, input: &'a str) -> Intent<'a> {
        Intent::classify(input, &self.tables)
    }

    pub async fn route(&self, input: &str) -> Message {
        if let Err(err) = self.validate(input) {
            tracing::debug!("Rejected input: {}", err);
            let text = match err {
                HelloError::Validation(reason) => reason,
                other => other.to_string(),
            };
            return Message::bot(text);
        }

        let intent = self.classify(input);
        tracing::debug!(intent = intent.name(), "Classified input");
        Message::bot(self.dispatch(intent).await)
    }

    async fn dispatch(&self, intent: Intent<'_>) -> String {
        match intent {
            Intent::CodeSnippet(response) | Intent::GitHelp(response) => response.to_string(),
            Intent::Docs { query } => self.search_docs(query).await,
            Intent::SaveSnippet { name, content } => self.save_snippet(name, content),
            Intent::FetchSnippet { name } => match self.fetch_snippet(name) {
                Ok(content) => content,
                Err(HelloError::NotFound(_)) => {
                    format!("No snippet named '{}' was found.", name)
                }
                Err(e) => e.to_string(),
            },
            Intent::DeleteSnippet { name } => self.delete_snippet(name),
            Intent::ListSnippets => self.list_snippets(),
            Intent::ReviewCode { code } => {
                let prompt = prompts::REVIEW_PROMPT.replace("{code}", code);
                self.complete(&prompt, self.review_max_tokens).await
            }
            Intent::Chat { prompt } => self.complete(prompt, self.max_tokens).await,
        }
    }

    async fn search_docs(&self, query: &str) -> String {
        match self.docs.search(query).await {
            Ok(results) => match results.first() {
                Some(top) => format!(
                    "Here's what I found on MDN: {}\nLink: {}",
                    top.summary, top.url
                ),
                None => replies::DOCS_NOTHING_FOUND.to_string(),
            },
            Err(e) => {
                tracing::warn!(query, "Documentation search failed: {}", e);
                format!("{} ({})", replies::DOCS_FAILED, e)
            }
        }
    }

    fn save_snippet(&self, name: &str, content: &str) -> String {
        match self.store.save(name, content) {
            Ok(()) => format!("Snippet '{}' saved.", name),
            Err(e) => {
                tracing::warn!(name, "Saving snippet failed: {}", e);
                format!("Sorry, I couldn't save snippet '{}'. ({})", name, e)
            }
        }
    }

    fn fetch_snippet(&self, name: &str) -> Result<String> {
        self.store
            .fetch(name)
            .ok_or_else(|| HelloError::NotFound(name.to_string()))
    }

    fn delete_snippet(&self, name: &str) -> String {
        match self.store.delete(name) {
            Ok(true) => format!("Snippet '{}' deleted.", name),
            Ok(false) => format!("There is no snippet named '{}' to delete.", name),
            Err(e) => {
                tracing::warn!(name, "Deleting snippet failed: {}", e);
                format!("Sorry, I couldn't delete snippet '{}'. ({})", name, e)
            }
        }
    }

    fn list_snippets(&self) -> String {
        let snippets = self.store.list_all();
        if snippets.is_empty() {
            return replies::NO_SNIPPETS.to_string();
        }
        snippets
            .iter()
            .map(|snippet| {
                let preview = snippet.content.lines().next().unwrap_or("");
                format!("- {}: {}", snippet.name, preview)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> String {
        match self.completion.complete(prompt, max_tokens).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!("Completion request failed: {}", e);
                format!("{} ({})", replies::COMPLETION_FAILED, e)
            }
        }
    }
}
