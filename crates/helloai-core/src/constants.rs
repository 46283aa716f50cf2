//! Hello-World-AI: centralized constants.
//! Endpoints, limits and user-facing reply strings live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    /// Legacy completions-endpoint model.
    pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
    pub const OPENAI_COMPLETIONS_PATH: &str = "/v1/completions";
    pub const MDN_BASE_URL: &str = "https://developer.mozilla.org";
    pub const MDN_SEARCH_PATH: &str = "/api/v1/search";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
    pub const MAX_TOKENS: u32 = 150;
    pub const REVIEW_MAX_TOKENS: u32 = 300;
    pub const DOCS_LOCALE: &str = "en-US";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const USER_AGENT: &str = "HelloWorldAI/0.1";
}

// ─── Limits ───────────────────────────────────────────────────────────────────

pub mod limits {
    /// Longest accepted input, counted in characters.
    pub const MAX_INPUT_CHARS: usize = 500;
}

// ─── Command Keywords ─────────────────────────────────────────────────────────

pub mod commands {
    pub const DOCS: &str = "docs ";
    pub const SAVE_SNIPPET: &str = "save snippet ";
    pub const FETCH_SNIPPET: &str = "fetch snippet ";
    pub const DELETE_SNIPPET: &str = "delete snippet ";
    pub const LIST_SNIPPETS: &str = "list snippets";
    pub const REVIEW_CODE: &str = "review code ";
}

// ─── Prompts ──────────────────────────────────────────────────────────────────

pub mod prompts {
    /// `{code}` is replaced with the body to review.
    pub const REVIEW_PROMPT: &str = "Review the following code. Point out bugs, \
readability problems and possible improvements, then suggest a corrected version if needed.\n\n\
{code}";
}

// ─── Reply Strings ────────────────────────────────────────────────────────────

pub mod replies {
    pub const EMPTY_INPUT: &str = "Please type a message before sending.";
    pub const DOCS_NOTHING_FOUND: &str = "Sorry, I couldn't find anything on that topic.";
    pub const DOCS_FAILED: &str = "Sorry, I encountered an error while fetching the documentation.";
    pub const COMPLETION_FAILED: &str = "Error: Could not reach AI service.";
    pub const NO_SNIPPETS: &str = "You have no saved snippets.";
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const APP_DIR: &str = "helloai";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const SNIPPETS_FILE: &str = "snippets.json";
}
