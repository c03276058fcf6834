//! Commit types, prompt construction and final message formatting.

pub mod kind;
pub mod message;
pub mod prompt;

pub use kind::CommitType;
pub use message::CommitMessage;
pub use prompt::{CommitPrompt, SYSTEM_PROMPT, build_commit_prompt};
