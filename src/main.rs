//! commit-agent - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commit_agent::agent::{AgentOptions, Outcome, run_agent};
use commit_agent::commit::CommitType;
use commit_agent::config::Config;
use commit_agent::git::{SystemGit, check_git_installed};
use commit_agent::interact::TerminalPrompter;
use commit_agent::llm::ChatClient;

/// Write a commit message for staged changes with an LLM, then commit and push.
#[derive(Parser, Debug)]
#[command(name = "commit-agent")]
#[command(about = "Write a commit message for staged changes with an LLM, then commit and push")]
#[command(version)]
struct Cli {
    /// Commit type (feat, chore, bug, refactor, fix, docs, test, style, perf) or
    /// its menu number. Prompts with a menu when omitted.
    commit_type: Option<String>,

    /// Free-text note passed to the model along with the diff
    note: Vec<String>,

    /// Commit the index as it is instead of running `git add .` first
    #[arg(long)]
    no_stage: bool,

    /// Commit without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Commit but do not push
    #[arg(long)]
    no_push: bool,

    /// Remote to push HEAD to
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Model identifier (overrides COMMIT_AGENT_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Print the generated message without committing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Step 1: Resolve the commit type given on the command line, if any
    let commit_type = parse_commit_type(cli.commit_type.as_deref())?;

    let note = Some(cli.note.join(" ")).filter(|n| !n.trim().is_empty());

    // Step 2: Configuration and credential
    let config = Config::from_env().with_model(cli.model);
    let client = build_client(&config)?;

    // Step 3: Open git repository
    check_git_installed().context("Failed to locate git")?;
    let git = SystemGit::discover(".").context("Failed to open git repository")?;

    println!("Starting commit-agent...");
    println!(
        "Repository: {} (branch: {}), model: {}",
        git.workdir().display(),
        git.branch().unwrap_or("detached"),
        client.model()
    );

    let options = AgentOptions {
        commit_type,
        note,
        stage: !cli.no_stage,
        confirm: !cli.yes,
        push: !cli.no_push,
        remote: cli.remote,
        dry_run: cli.dry_run,
    };

    // Step 4: Run the pipeline
    let outcome = run_agent(&options, &git, &client, &TerminalPrompter)
        .await
        .context("Commit agent failed")?;

    if let Outcome::Committed { message, pushed } = outcome {
        println!();
        if pushed {
            println!("✓ Committed and pushed: {}", message);
        } else {
            println!("✓ Committed: {}", message);
        }
    }

    Ok(())
}

fn parse_commit_type(arg: Option<&str>) -> Result<Option<CommitType>> {
    arg.map(str::parse::<CommitType>)
        .transpose()
        .context("Invalid commit type argument")
}

fn build_client(config: &Config) -> Result<ChatClient> {
    ChatClient::from_config(config).context("Failed to set up the chat-completion client")
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_type_and_note_words() {
        let cli = Cli::try_parse_from(["commit-agent", "fix", "handle", "empty", "input"]).unwrap();
        assert_eq!(cli.commit_type.as_deref(), Some("fix"));
        assert_eq!(cli.note.join(" "), "handle empty input");
        assert!(!cli.no_stage);
        assert_eq!(cli.remote, "origin");
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let cli = Cli::try_parse_from(["commit-agent"]).unwrap();
        assert!(cli.commit_type.is_none());
        assert!(cli.note.is_empty());
    }

    #[test]
    fn test_commit_type_argument_error_keeps_cause() {
        assert_eq!(parse_commit_type(None).unwrap(), None);
        assert_eq!(parse_commit_type(Some("docs")).unwrap(), Some(CommitType::Docs));

        let err = parse_commit_type(Some("01")).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.starts_with("Invalid commit type argument: "));
        assert!(chain.contains("feat, chore, bug"));
    }

    #[test]
    fn test_missing_api_key_error_keeps_cause() {
        let config = Config {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            timeout: None,
        };

        let chain = format!("{:#}", build_client(&config).unwrap_err());
        assert!(chain.starts_with("Failed to set up the chat-completion client: "));
        assert!(chain.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "commit-agent",
            "--no-stage",
            "-y",
            "--no-push",
            "--remote",
            "upstream",
            "--model",
            "gpt-4o",
            "--dry-run",
            "-v",
            "chore",
        ])
        .unwrap();
        assert!(cli.no_stage && cli.yes && cli.no_push && cli.dry_run && cli.verbose);
        assert_eq!(cli.remote, "upstream");
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.commit_type.as_deref(), Some("chore"));
    }
}
