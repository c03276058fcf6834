//! Terminal interaction: the commit-type menu, the optional note, and the
//! commit confirmation.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use dialoguer::{Confirm, Input};

use crate::commit::CommitType;
use crate::error::{AgentError, PromptError};

/// Line-oriented user interaction.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Print text for the user.
    fn show(&self, text: &str);

    /// Read one line of input; may be empty.
    fn read_line(&self, prompt: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question. Defaults to no.
    fn confirm(&self, prompt: &str) -> Result<bool, PromptError>;
}

/// [`Prompter`] on the controlling terminal via dialoguer.
///
/// When stdin or stderr is not a terminal (e.g. `printf '5\n\ny\n' | commit-agent`),
/// answers are read line by line from stdin instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn is_interactive() -> bool {
        Term::stderr().is_term() && io::stdin().is_terminal()
    }

    fn read_piped(prompt: &str) -> Result<String, PromptError> {
        eprint!("{}: ", prompt);
        read_plain_line(&mut io::stdin().lock())
    }
}

impl Prompter for TerminalPrompter {
    fn show(&self, text: &str) {
        println!("{}", text);
    }

    fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
        if !Self::is_interactive() {
            return Self::read_piped(prompt);
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::Terminal)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, PromptError> {
        if !Self::is_interactive() {
            let answer = Self::read_piped(&format!("{} [y/N]", prompt))?;
            return Ok(is_yes(&answer));
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(PromptError::Terminal)
    }
}

/// Read one line without its line ending. End of input reads as an empty line.
fn read_plain_line(reader: &mut impl BufRead) -> Result<String, PromptError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(PromptError::Input)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print the numbered menu and map the answer to a commit type.
pub fn select_commit_type(prompter: &dyn Prompter) -> Result<CommitType, AgentError> {
    prompter.show(&format!("\nSelect commit type:\n{}", CommitType::menu()));
    let answer = prompter.read_line("Enter the number corresponding to commit type")?;
    Ok(CommitType::from_menu_choice(&answer)?)
}

/// Ask for the optional note. Blank answers become `None`.
pub fn read_note(prompter: &dyn Prompter) -> Result<Option<String>, AgentError> {
    let note = prompter.read_line("Optional note (press Enter to skip)")?;
    let note = note.trim();
    Ok((!note.is_empty()).then(|| note.to_string()))
}
