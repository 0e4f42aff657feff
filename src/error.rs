//! Error types for the repository bootstrapper.

use std::fmt;
use thiserror::Error;

/// A required prompt that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GithubUsername,
    RepoName,
    ExistingRepoUrl,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::GithubUsername => f.write_str("GitHub username cannot be empty."),
            Field::RepoName => f.write_str("Repository name cannot be empty."),
            Field::ExistingRepoUrl => f.write_str("Repository URL cannot be empty. Exiting."),
        }
    }
}

/// The main error type for bootstrap operations.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("{tool} is not installed or not found in the system PATH.{}", hint_suffix(.hint))]
    ToolNotFound { tool: String, hint: Option<String> },

    #[error("{0}")]
    EmptyField(Field),

    #[error("Error: A directory with the name '{0}' already exists. Exiting script.")]
    DirectoryExists(String),

    #[error("Command `{command}` failed with exit status {}", code_text(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!("\n{}", hint),
        None => String::new(),
    }
}

fn code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // Killed by a signal
        None => "unknown".to_string(),
    }
}

/// A specialized Result type for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_messages() {
        assert_eq!(
            BootstrapError::EmptyField(Field::GithubUsername).to_string(),
            "GitHub username cannot be empty."
        );
        assert_eq!(
            BootstrapError::EmptyField(Field::ExistingRepoUrl).to_string(),
            "Repository URL cannot be empty. Exiting."
        );
    }

    #[test]
    fn test_tool_not_found_with_hint() {
        let err = BootstrapError::ToolNotFound {
            tool: "GitHub CLI (gh)".into(),
            hint: Some("Install GitHub CLI from https://cli.github.com/.".into()),
        };
        assert_eq!(
            err.to_string(),
            "GitHub CLI (gh) is not installed or not found in the system PATH.\n\
             Install GitHub CLI from https://cli.github.com/."
        );
    }

    #[test]
    fn test_command_failed_message() {
        let err = BootstrapError::CommandFailed {
            command: "git push -u origin main".into(),
            code: Some(128),
        };
        assert_eq!(
            err.to_string(),
            "Command `git push -u origin main` failed with exit status 128"
        );
    }
}
