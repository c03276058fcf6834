//! Git operations for the commit pipeline: stage, diff, commit, push.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, hooks, SSH agent, and
//! credential store.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::GitError;

/// The version-control side of the pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// Stage every working-tree change (`git add .`).
    fn stage_all(&self) -> Result<(), GitError>;

    /// Staged changes as unified diff text (`git diff --cached`).
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a commit from the index with the given message.
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Push the current HEAD to `remote`.
    fn push(&self, remote: &str) -> Result<(), GitError>;
}

/// Check that a `git` executable is reachable on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// [`GitRunner`] backed by the system `git` binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
    branch: Option<String>,
}

impl SystemGit {
    /// Locate the repository containing `path` and run git from its root.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::NotARepository)?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();
        let branch = current_branch(&repo);

        debug!("Repository root: {}", workdir.display());
        Ok(Self { workdir, branch })
    }

    /// Run git in `workdir` without inspecting it first.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            branch: None,
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Short name of the checked-out branch, if HEAD is on one.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Run a git command and return its stdout, or a descriptive error.
    fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // `git commit` reports "nothing to commit" on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: detail,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitRunner for SystemGit {
    fn stage_all(&self) -> Result<(), GitError> {
        self.run_git(&["add", "."], "add").map(|_| ())
    }

    fn staged_diff(&self) -> Result<String, GitError> {
        self.run_git(&["diff", "--cached", "--no-color", "--no-ext-diff"], "diff")
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit").map(|_| ())
    }

    fn push(&self, remote: &str) -> Result<(), GitError> {
        self.run_git(&["push", remote, "HEAD"], "push").map(|_| ())
    }
}

fn current_branch(repo: &Repository) -> Option<String> {
    match repo.head() {
        Ok(head) if head.is_branch() => head.shorthand().map(String::from),
        Ok(_) => None,
        // Unborn branch: HEAD names a branch with no commits yet.
        Err(e) if e.code() == ErrorCode::UnbornBranch => repo
            .find_reference("HEAD")
            .ok()
            .and_then(|r| r.symbolic_target().map(String::from))
            .map(|t| t.trim_start_matches("refs/heads/").to_string()),
        Err(_) => None,
    }
}
