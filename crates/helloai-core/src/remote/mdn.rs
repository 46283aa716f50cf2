use crate::constants::{defaults, endpoints};
use crate::error::HelloError;
use crate::remote::traits::{DocResult, DocSearch};
use serde::Deserialize;

/// MDN Web Docs search (`/api/v1/search`). No credentials required.
pub struct MdnSearchClient {
    client: reqwest::Client,
    base_url: String,
    locale: String,
    timeout_secs: u64,
}

impl MdnSearchClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: endpoints::MDN_BASE_URL.to_string(),
            locale: defaults::DOCS_LOCALE.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(mut self) -> Result<Self, HelloError> {
        self.client = super::http_client(self.timeout_secs)?;
        Ok(self)
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}?q={}&locale={}",
            self.base_url,
            endpoints::MDN_SEARCH_PATH,
            urlencoding::encode(query),
            urlencoding::encode(&self.locale)
        )
    }

    /// MDN returns site-relative paths; make them clickable.
    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            url.to_string()
        }
    }
}

impl Default for MdnSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    documents: Option<Vec<SearchDocument>>,
}

#[derive(Debug, Deserialize)]
struct SearchDocument {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    mdn_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[async_trait::async_trait]
impl DocSearch for MdnSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<DocResult>, HelloError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "Searching documentation");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(HelloError::Transport(format!(
                "Documentation search failed ({}): {}",
                status, response_text
            )));
        }

        let parsed: SearchResponse = serde_json::from_str(&response_text).map_err(|e| {
            HelloError::Transport(format!("Failed to parse search response: {e}"))
        })?;

        Ok(parsed
            .documents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|doc| {
                let link = doc.mdn_url.or(doc.url)?;
                Some(DocResult {
                    summary: doc.summary.unwrap_or_default().trim().to_string(),
                    url: self.absolute_url(&link),
                })
            })
            .collect())
    }
}
