//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use git2::{Oid, Repository, Signature};
use serde_json::{Value, json};

use commit_agent::error::PromptError;
use commit_agent::interact::Prompter;

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with a local identity,
    /// so the system `git commit` works regardless of global config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable commit signing");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Stage `name` and commit it with git2. Returns the commit OID.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Oid {
        self.write_file(name, content);

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the commit HEAD points at.
    pub fn head_message(&self) -> Option<String> {
        let head = self.repo.head().ok()?.peel_to_commit().ok()?;
        head.message().map(String::from)
    }

    /// Short name of the current branch.
    pub fn branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(String::from))
            .unwrap_or_else(|| "master".to_string())
    }

    /// Add a bare repository as remote `name`. The returned dir keeps it alive.
    pub fn add_bare_remote(&self, name: &str) -> (tempfile::TempDir, Repository) {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        let bare = Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        self.repo
            .remote(name, remote_dir.path().to_str().expect("Invalid remote path"))
            .expect("Failed to add remote");
        (remote_dir, bare)
    }
}

/// Chat-completion success body.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

/// Chat-completion error body, shaped like OpenAI's.
pub fn error_body(message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

/// A [`Prompter`] that answers from a script and records what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    lines: RefCell<VecDeque<String>>,
    confirm_answer: bool,
    pub shown: RefCell<Vec<String>>,
    pub confirmations: RefCell<usize>,
}

impl ScriptedPrompter {
    pub fn new(lines: &[&str], confirm_answer: bool) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
            confirm_answer,
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_string());
    }

    fn read_line(&self, _prompt: &str) -> Result<String, PromptError> {
        Ok(self
            .lines
            .borrow_mut()
            .pop_front()
            .expect("ScriptedPrompter ran out of answers"))
    }

    fn confirm(&self, _prompt: &str) -> Result<bool, PromptError> {
        *self.confirmations.borrow_mut() += 1;
        Ok(self.confirm_answer)
    }
}
