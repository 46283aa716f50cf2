use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::constants::{defaults, endpoints, limits, models, paths};
use crate::error::{HelloError, Result};
use crate::remote::{MdnSearchClient, OpenAICompletionClient};
use crate::snippets::FileSnippetStore;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub docs: DocsSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub router: RouterSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    pub model: String,
    /// Name of the environment variable holding the bearer token.
    pub api_key_env: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub review_max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
    pub base_url: String,
    pub locale: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    pub max_input_chars: usize,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: models::DEFAULT_COMPLETION_MODEL.to_string(),
            api_key_env: defaults::API_KEY_ENV.to_string(),
            base_url: endpoints::OPENAI_BASE_URL.to_string(),
            max_tokens: defaults::MAX_TOKENS,
            review_max_tokens: defaults::REVIEW_MAX_TOKENS,
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            base_url: endpoints::MDN_BASE_URL.to_string(),
            locale: defaults::DOCS_LOCALE.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            max_input_chars: limits::MAX_INPUT_CHARS,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::APP_DIR)
            .join(paths::CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Falls back to defaults when the file is missing or unparsable.
    pub fn load_from(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring invalid config {}: {}", path.display(), e),
                },
                Err(e) => tracing::warn!("Could not read config {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HelloError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.completion.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Configured snippet file, or `<data_dir>/helloai/snippets.json`.
    pub fn snippets_path(&self) -> PathBuf {
        if let Some(ref path) = self.storage.snippets_path {
            return path.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::APP_DIR)
            .join(paths::SNIPPETS_FILE)
    }

    pub fn build_completion_client(&self) -> Result<Arc<OpenAICompletionClient>> {
        let client = OpenAICompletionClient::new(self.api_key())
            .with_model(&self.completion.model)
            .with_base_url(&self.completion.base_url)
            .with_timeout_secs(self.completion.timeout_secs)
            .build()?;
        Ok(Arc::new(client))
    }

    pub fn build_doc_search(&self) -> Result<Arc<MdnSearchClient>> {
        let client = MdnSearchClient::new()
            .with_base_url(&self.docs.base_url)
            .with_locale(&self.docs.locale)
            .with_timeout_secs(self.docs.timeout_secs)
            .build()?;
        Ok(Arc::new(client))
    }

    pub fn build_snippet_store(&self) -> Result<Arc<FileSnippetStore>> {
        Ok(Arc::new(FileSnippetStore::open(self.snippets_path())?))
    }
}
