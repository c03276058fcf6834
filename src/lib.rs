//! commit-agent - A CLI tool that writes commit messages for staged changes with an LLM.
//!
//! # Overview
//!
//! commit-agent stages the working tree, sends the staged diff together with a
//! chosen commit type to an OpenAI-compatible chat-completion API, prefixes the
//! reply with the type label, and commits and pushes the result.

pub mod agent;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod interact;
pub mod llm;

// Re-export commonly used types
pub use agent::{AgentOptions, Outcome, run_agent};
pub use commit::{CommitMessage, CommitPrompt, CommitType};
pub use config::Config;
pub use error::{AgentError, GitError, LlmError, PromptError, SelectError};
pub use git::{GitRunner, SystemGit};
pub use interact::{Prompter, TerminalPrompter};
pub use llm::{ChatClient, MessageGenerator};
