//! Final commit message formatting.

use std::fmt;

use crate::commit::kind::CommitType;
use crate::error::AgentError;

/// A commit message ready to hand to `git commit -m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    commit_type: CommitType,
    text: String,
}

impl CommitMessage {
    /// Pair a type with the generated text.
    ///
    /// The text is used as given; it is only rejected when it is blank.
    pub fn new(commit_type: CommitType, text: impl Into<String>) -> Result<Self, AgentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AgentError::EmptyMessage);
        }
        Ok(Self { commit_type, text })
    }

    /// Format the message for git: `[TYPE] text`.
    pub fn format(&self) -> String {
        format!("[{}] {}", self.commit_type, self.text)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
