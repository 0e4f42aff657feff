//! GitHub repository creation.

use crate::config::Visibility;
use crate::error::Result;
use crate::github::GhCli;
use crate::runner::CommandRunner;
use std::path::Path;

/// Request for creating a repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRepo {
    pub name: String,
    pub visibility: Visibility,
    pub description: Option<String>,
}

impl CreateRepo {
    /// Create a private repository request with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            description: None,
        }
    }

    /// Set the visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the description. An empty description is ignored.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Arguments for `gh`, starting at `repo create`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "repo".to_string(),
            "create".to_string(),
            self.name.clone(),
            self.visibility.flag().to_string(),
        ];
        if let Some(ref description) = self.description {
            args.push("--description".to_string());
            args.push(description.clone());
        }
        args
    }
}

/// Repository operations.
pub trait RepoOps {
    /// Create a repository on GitHub (`gh repo create`), running from `dir`.
    fn create_repo(&self, request: &CreateRepo, dir: &Path) -> Result<()>;
}

impl<R: CommandRunner> RepoOps for GhCli<R> {
    fn create_repo(&self, request: &CreateRepo, dir: &Path) -> Result<()> {
        log::info!(
            "creating {} repository {}",
            request.visibility.flag().trim_start_matches('-'),
            request.name
        );
        self.run_in(dir, request.to_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_private_without_description() {
        let request = CreateRepo::new("demo");
        assert_eq!(request.to_args(), vec!["repo", "create", "demo", "--private"]);
    }

    #[test]
    fn test_public_with_description_is_verbatim() {
        let request = CreateRepo::new("demo")
            .visibility(Visibility::parse("PuBlIc"))
            .description("My \"demo\" repo");
        assert_eq!(
            request.to_args(),
            vec![
                "repo",
                "create",
                "demo",
                "--public",
                "--description",
                "My \"demo\" repo"
            ]
        );
    }

    #[test]
    fn test_empty_description_is_omitted() {
        let request = CreateRepo::new("demo").description("");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_create_runs_in_dir() {
        let runner = RecordingRunner::new();
        let gh = GhCli::new(&runner, "gh");
        gh.create_repo(&CreateRepo::new("demo"), Path::new("/work/demo"))
            .unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to_string(), "gh repo create demo --private");
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/work/demo")));
    }
}
