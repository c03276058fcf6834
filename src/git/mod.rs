//! Git repository access and command execution.

pub mod runner;

pub use runner::{GitRunner, SystemGit, check_git_installed};
