mod traits;
mod mdn;
mod openai;

pub use traits::*;
pub use mdn::MdnSearchClient;
pub use openai::OpenAICompletionClient;

use crate::constants::defaults;
use crate::error::HelloError;
use std::time::Duration;

/// Shared HTTP client setup for the remote collaborators.
fn http_client(timeout_secs: u64) -> Result<reqwest::Client, HelloError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(defaults::USER_AGENT)
        .build()
        .map_err(|e| HelloError::Config(format!("HTTP client error: {e}")))
}
