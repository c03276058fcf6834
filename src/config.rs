//! Environment-driven configuration.
//!
//! Every setting comes from an environment variable. Invalid values log a
//! warning and fall back to the default; only the API key is required, and
//! its absence is reported by the chat client rather than here.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable to override the model identifier.
pub const MODEL_ENV_VAR: &str = "COMMIT_AGENT_MODEL";

/// Environment variable to override the chat-completion endpoint.
pub const API_URL_ENV_VAR: &str = "COMMIT_AGENT_API_URL";

/// Environment variable to set a request timeout (seconds).
pub const TIMEOUT_ENV_VAR: &str = "COMMIT_AGENT_TIMEOUT";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when the variable is unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var(API_KEY_ENV_VAR),
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: non_empty_var(API_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: get_timeout(),
        }
    }

    /// Override the model (from `--model`).
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get the configured request timeout, if any.
///
/// Logs a warning if the variable is set but is not a positive number of
/// seconds.
fn get_timeout() -> Option<Duration> {
    let value = non_empty_var(TIMEOUT_ENV_VAR)?;
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(
                "Invalid {} value '{}', using the HTTP client default",
                TIMEOUT_ENV_VAR, value
            );
            None
        }
    }
}
