//! Commit-type labels and their menu numbering.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectError;

/// Commit categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Chore,
    Bug,
    Refactor,
    Fix,
    Docs,
    Test,
    Style,
    Perf,
}

impl CommitType {
    /// All types in the order the interactive menu lists them.
    pub const ALL: [CommitType; 9] = [
        CommitType::Feat,
        CommitType::Chore,
        CommitType::Bug,
        CommitType::Refactor,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Test,
        CommitType::Style,
        CommitType::Perf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "FEAT",
            CommitType::Chore => "CHORE",
            CommitType::Bug => "BUG",
            CommitType::Refactor => "REFACTOR",
            CommitType::Fix => "FIX",
            CommitType::Docs => "DOCS",
            CommitType::Test => "TEST",
            CommitType::Style => "STYLE",
            CommitType::Perf => "PERF",
        }
    }

    /// 1-based position in the menu.
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Map a menu answer to a type. Only the exact keys "1".."9" match;
    /// "01" or "+1" are invalid.
    pub fn from_menu_choice(choice: &str) -> Result<Self, SelectError> {
        let choice = choice.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.menu_number().to_string() == choice)
            .ok_or_else(|| SelectError::InvalidChoice(choice.to_string()))
    }

    /// Render the numbered menu, one entry per line.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|t| format!("{}. {}", t.menu_number(), t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn label_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a command-line label case-insensitively. Menu numbers and the
/// `feature` alias are accepted too.
impl FromStr for CommitType {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if let Ok(t) = Self::from_menu_choice(label) {
            return Ok(t);
        }

        match label.to_lowercase().as_str() {
            "feat" | "feature" => Ok(Self::Feat),
            "chore" => Ok(Self::Chore),
            "bug" => Ok(Self::Bug),
            "refactor" => Ok(Self::Refactor),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "test" => Ok(Self::Test),
            "style" => Ok(Self::Style),
            "perf" => Ok(Self::Perf),
            _ => Err(SelectError::UnknownCommitType(
                label.to_string(),
                Self::label_list(),
            )),
        }
    }
}
