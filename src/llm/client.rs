//! HTTP client for OpenAI-compatible chat-completion endpoints.
//!
//! One request per call. Failures are classified from the response body,
//! never retried.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::commit::CommitPrompt;
use crate::config::Config;
use crate::error::LlmError;
use crate::llm::types::{ChatRequest, ChatResponse, error_message};

/// Something that turns a prompt into generated commit text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    async fn generate(&self, prompt: &CommitPrompt) -> Result<String, LlmError>;
}

/// Chat-completion client authenticated with a bearer key.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl ChatClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`LlmError::MissingApiKey`] before anything else is set up
    /// when no credential is configured.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LlmError::ClientBuild)?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            api_url: config.api_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat request and return the first candidate's text.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        debug!(
            "POST {} (model={}, {} messages)",
            self.api_url,
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        let raw = response.text().await.map_err(LlmError::Transport)?;
        debug!("API responded with {} ({} bytes)", status, raw.len());

        parse_completion(&raw)
    }
}

#[async_trait]
impl MessageGenerator for ChatClient {
    async fn generate(&self, prompt: &CommitPrompt) -> Result<String, LlmError> {
        let request = ChatRequest::from_prompt(&self.model, prompt);
        self.complete(&request).await
    }
}

/// Classify a raw response body.
///
/// Checked in order: body is JSON, no `error` field, non-empty `choices`.
/// The first choice's content is returned trimmed; a null content yields an
/// empty string.
pub fn parse_completion(raw: &str) -> Result<String, LlmError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| LlmError::MalformedResponse {
        raw: raw.to_string(),
        source,
    })?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        return Err(LlmError::Api {
            message: error_message(error),
        });
    }

    let response: ChatResponse = match serde_json::from_value(value.clone()) {
        Ok(response) => response,
        Err(e) => {
            debug!("Response did not match the chat-completion shape: {}", e);
            return Err(LlmError::NoChoices {
                body: value.to_string(),
            });
        }
    };

    let first = response.choices.into_iter().next().ok_or_else(|| LlmError::NoChoices {
        body: value.to_string(),
    })?;

    Ok(first.message.content.unwrap_or_default().trim().to_string())
}
