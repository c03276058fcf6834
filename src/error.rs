//! Error types for commit-agent modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install git and try again.")]
    NotInstalled,

    #[error("Not a git repository. Run commit-agent from within a git repository: {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Bare repository not supported")]
    BareRepository,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },
}

/// Errors from resolving the commit type.
#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Invalid selection '{0}'. Please run again and choose a valid option.")]
    InvalidChoice(String),

    #[error("Unknown commit type '{0}'. Expected one of: {1}")]
    UnknownCommitType(String, String),
}

/// Errors from the chat-completion API.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Missing OPENAI_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to call the chat-completion API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse API response as JSON: {source}\nRaw response: {raw}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Unexpected API response, 'choices' missing or empty: {body}")]
    NoChoices { body: String },
}

/// Errors from terminal interaction.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read input: {0}")]
    Terminal(#[source] dialoguer::Error),

    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),
}

/// Errors from the commit pipeline.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("No staged changes found. Nothing to commit.")]
    NoStagedChanges,

    #[error("The model returned an empty commit message")]
    EmptyMessage,

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_surfaces_stderr() {
        let err = GitError::CommandFailed {
            operation: "push".into(),
            stderr: "fatal: 'origin' does not appear to be a git repository".into(),
        };
        assert_eq!(
            err.to_string(),
            "git push failed: fatal: 'origin' does not appear to be a git repository"
        );
    }

    #[test]
    fn test_api_error_keeps_message_verbatim() {
        let err = LlmError::Api {
            message: "Incorrect API key provided: sk-xxx.".into(),
        };
        assert_eq!(err.to_string(), "API error: Incorrect API key provided: sk-xxx.");
    }

    #[test]
    fn test_agent_error_is_transparent_over_sources() {
        let err: AgentError = LlmError::MissingApiKey.into();
        assert_eq!(err.to_string(), "Missing OPENAI_API_KEY environment variable.");
    }
}
