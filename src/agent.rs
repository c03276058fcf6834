//! Commit pipeline: stage, diff, pick a type, generate, confirm, commit, push.
//!
//! Strictly forward. Every failure ends the run; declining the confirmation
//! ends it successfully without touching the repository.

use tracing::debug;

use crate::commit::{CommitMessage, CommitType, build_commit_prompt};
use crate::error::AgentError;
use crate::git::GitRunner;
use crate::interact::{Prompter, read_note, select_commit_type};
use crate::llm::MessageGenerator;

/// Pipeline switches, derived from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    /// `None` selects the type interactively.
    pub commit_type: Option<CommitType>,
    pub note: Option<String>,
    /// Run `git add .` before reading the diff.
    pub stage: bool,
    /// Ask before committing.
    pub confirm: bool,
    pub push: bool,
    pub remote: String,
    /// Print the message and stop.
    pub dry_run: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            commit_type: None,
            note: None,
            stage: true,
            confirm: true,
            push: true,
            remote: "origin".to_string(),
            dry_run: false,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed { message: String, pushed: bool },
    Cancelled { message: String },
    DryRun { message: String },
}

/// Run the full commit pipeline.
pub async fn run_agent(
    options: &AgentOptions,
    git: &dyn GitRunner,
    generator: &dyn MessageGenerator,
    prompter: &dyn Prompter,
) -> Result<Outcome, AgentError> {
    // ── Stage 1: Stage and read the diff ──
    if options.stage {
        git.stage_all()?;
        println!("  [DONE] Staged all changes");
    } else {
        println!("  [SKIP] Staging (using the current index)");
    }

    let diff = git.staged_diff()?;
    if diff.trim().is_empty() {
        return Err(AgentError::NoStagedChanges);
    }
    debug!("Staged diff: {} bytes", diff.len());

    // ── Stage 2: Commit type and note ──
    let (commit_type, note) = match options.commit_type {
        Some(commit_type) => (commit_type, options.note.clone()),
        None => {
            let commit_type = select_commit_type(prompter)?;
            let note = match &options.note {
                Some(note) => Some(note.clone()),
                None => read_note(prompter)?,
            };
            (commit_type, note)
        }
    };
    debug!("Commit type: {}, note: {:?}", commit_type, note);

    // ── Stage 3: Generate ──
    let prompt = build_commit_prompt(&diff, commit_type, note.as_deref());
    println!("Generating commit message...");
    let generated = generator.generate(&prompt).await?;
    let message = CommitMessage::new(commit_type, generated)?.format();

    println!();
    println!("Suggested commit message:");
    println!("{}", message);

    if options.dry_run {
        println!();
        println!("Dry run complete. No changes made.");
        return Ok(Outcome::DryRun { message });
    }

    // ── Stage 4: Confirm, commit, push ──
    if options.confirm {
        println!();
        if !prompter.confirm("Do you want to proceed with this commit?")? {
            println!("Commit cancelled.");
            return Ok(Outcome::Cancelled { message });
        }
    }

    git.commit(&message)?;
    println!("  [DONE] Created commit");

    if options.push {
        git.push(&options.remote)?;
        println!("  [DONE] Pushed to {}", options.remote);
    } else {
        println!("  [SKIP] Push");
    }

    Ok(Outcome::Committed {
        message,
        pushed: options.push,
    })
}
