use crate::constants::{defaults, endpoints, models};
use crate::error::HelloError;
use crate::remote::traits::CompletionClient;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Client for the OpenAI legacy `/v1/completions` endpoint.
pub struct OpenAICompletionClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl OpenAICompletionClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: models::DEFAULT_COMPLETION_MODEL.to_string(),
            base_url: endpoints::OPENAI_BASE_URL.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Rebuild the HTTP client with the configured timeout.
    pub fn build(mut self) -> Result<Self, HelloError> {
        self.client = super::http_client(self.timeout_secs)?;
        Ok(self)
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

#[async_trait::async_trait]
impl CompletionClient for OpenAICompletionClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, HelloError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| HelloError::Auth("No API key configured".into()))?;

        let url = format!("{}{}", self.base_url, endpoints::OPENAI_COMPLETIONS_PATH);
        tracing::debug!(%url, model = %self.model, max_tokens, "Requesting completion");

        let request_body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(HelloError::Auth(format!(
                "OpenAI rejected the credentials ({}): {}",
                status, response_text
            )));
        }

        if !status.is_success() {
            return Err(HelloError::Transport(format!(
                "OpenAI API error ({}): {}",
                status, response_text
            )));
        }

        let api_response: CompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| HelloError::Transport(format!("Failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| HelloError::Transport("No choices in completion response".into()))?;

        Ok(choice.text.trim().to_string())
    }
}
