//! Prompt construction for AI-generated commit messages.

use crate::commit::kind::CommitType;

/// System message sent ahead of every request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that writes clean git commit messages.";

/// The two-message conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPrompt {
    pub system: String,
    pub user: String,
}

/// Build the LLM prompt for a commit message.
///
/// The diff is embedded verbatim. The note line is only present when a
/// non-blank note was given.
pub fn build_commit_prompt(diff: &str, commit_type: CommitType, note: Option<&str>) -> CommitPrompt {
    let note_line = match note.map(str::trim).filter(|n| !n.is_empty()) {
        Some(note) => format!("User extra note: {note}\n"),
        None => String::new(),
    };

    let user = format!(
        "You are a professional Git commit assistant.\n\
         Analyze the following git diff and generate a concise commit message.\n\
         Commit type is: {commit_type}.\n\
         {note_line}\
         \n\
         Diff:\n\
         {diff}\n"
    );

    CommitPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
