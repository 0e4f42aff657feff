//! Line-oriented interactive prompts.

use crate::config::{Answer, DEFAULT_BRANCH, DEFAULT_VISIBILITY, RepoConfig};
use crate::error::{BootstrapError, Field, Result};
use std::io::{BufRead, Write};

pub const USERNAME_PROMPT: &str = "Enter your GitHub username: ";
pub const REPO_NAME_PROMPT: &str = "Enter the new repository name: ";
pub const DESCRIPTION_PROMPT: &str = "Enter a description for the repository (optional): ";
pub const VISIBILITY_PROMPT: &str = "Enter visibility (private/public) [default: private]: ";
pub const BRANCH_PROMPT: &str = "Enter the main branch name (default: main): ";
pub const CLONE_PROMPT: &str =
    "Is this a cloned repo you want to push to GitHub? (yes/no) [default: no]: ";
pub const CLONE_URL_PROMPT: &str = "Enter the URL of the repository to clone: ";
pub const REMOVE_HISTORY_PROMPT: &str = "Do you want to remove Git history? (yes/no) [default: no]: ";

/// Reads single-line answers from `input`, writing each question to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Ask a question, substituting `default` for an empty answer.
    pub fn ask_or(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a question that must not be left empty.
    pub fn ask_required(&mut self, question: &str, field: Field) -> Result<String> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            return Err(BootstrapError::EmptyField(field));
        }
        Ok(answer)
    }

    /// Ask a yes/no question that defaults to no.
    pub fn confirm(&mut self, question: &str) -> Result<Answer> {
        let answer = self.ask_or(question, "no")?;
        Ok(Answer::parse(&answer))
    }

    /// Collect the repository configuration in prompt order.
    ///
    /// The clone URL is only asked for when the user chose to clone.
    pub fn collect_config(&mut self) -> Result<RepoConfig> {
        let github_username = self.ask_required(USERNAME_PROMPT, Field::GithubUsername)?;
        let repo_name = self.ask_required(REPO_NAME_PROMPT, Field::RepoName)?;
        let description = self.ask(DESCRIPTION_PROMPT)?;
        let visibility = self.ask_or(VISIBILITY_PROMPT, DEFAULT_VISIBILITY)?;
        let main_branch = self.ask_or(BRANCH_PROMPT, DEFAULT_BRANCH)?;

        let mut config = RepoConfig::new(github_username, repo_name)
            .description(description)
            .visibility(visibility)
            .main_branch(main_branch);

        if self.confirm(CLONE_PROMPT)?.is_yes() {
            let url = self.ask_required(CLONE_URL_PROMPT, Field::ExistingRepoUrl)?;
            config = config.clone_existing(url);
        }

        Ok(config)
    }

    /// Ask whether to drop the history of a cloned repository.
    pub fn remove_history(&mut self) -> Result<Answer> {
        self.confirm(REMOVE_HISTORY_PROMPT)
    }

    /// Write a line of progress output.
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Consume the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Visibility;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_defaults_on_empty_answers() {
        let mut p = prompter("alice\ndemo\n\n\n\n\n");
        let config = p.collect_config().unwrap();

        assert_eq!(config, RepoConfig::new("alice", "demo"));
    }

    #[test]
    fn test_answers_are_trimmed() {
        let mut p = prompter("  alice \r\ndemo\n  a demo repo \nPublic\ntrunk\nno\n");
        let config = p.collect_config().unwrap();

        assert_eq!(config.github_username, "alice");
        assert_eq!(config.description, "a demo repo");
        assert_eq!(config.visibility, Visibility::Public);
        assert_eq!(config.visibility_text, "Public");
        assert_eq!(config.main_branch, "trunk");
    }

    #[test]
    fn test_empty_username_aborts() {
        let mut p = prompter("\ndemo\n");
        let err = p.collect_config().unwrap_err();
        assert!(matches!(err, BootstrapError::EmptyField(Field::GithubUsername)));

        // Nothing past the failing prompt was asked.
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, USERNAME_PROMPT);
    }

    #[test]
    fn test_empty_repo_name_aborts() {
        let mut p = prompter("alice\n   \n");
        let err = p.collect_config().unwrap_err();
        assert!(matches!(err, BootstrapError::EmptyField(Field::RepoName)));
    }

    #[test]
    fn test_end_of_input_is_empty_answer() {
        let mut p = prompter("alice\ndemo");
        let config = p.collect_config().unwrap();
        assert_eq!(config.main_branch, "main");
        assert_eq!(config.clone_existing, Answer::No);
    }

    #[test]
    fn test_clone_asks_for_url() {
        let mut p = prompter("alice\ndemo\n\n\n\nYES\nhttps://example.com/x.git\n");
        let config = p.collect_config().unwrap();
        assert_eq!(config.clone_existing, Answer::Yes);
        assert_eq!(
            config.existing_repo_url.as_deref(),
            Some("https://example.com/x.git")
        );

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.ends_with(CLONE_URL_PROMPT));
    }

    #[test]
    fn test_clone_with_empty_url_aborts() {
        let mut p = prompter("alice\ndemo\n\n\n\nyes\n\n");
        let err = p.collect_config().unwrap_err();
        assert!(matches!(err, BootstrapError::EmptyField(Field::ExistingRepoUrl)));
    }

    #[test]
    fn test_remove_history_defaults_to_no() {
        let mut p = prompter("\n");
        assert_eq!(p.remove_history().unwrap(), Answer::No);

        let mut p = prompter("yes\n");
        assert_eq!(p.remove_history().unwrap(), Answer::Yes);
    }
}
