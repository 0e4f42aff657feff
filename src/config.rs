//! Run configuration: the answers collected from the user and the settings
//! that decide where tools run.

use std::path::PathBuf;

/// Default branch name when the prompt is left empty.
pub const DEFAULT_BRANCH: &str = "main";

/// Default visibility text when the prompt is left empty.
pub const DEFAULT_VISIBILITY: &str = "private";

/// Default hosting service host.
pub const DEFAULT_HOST: &str = "github.com";

/// Message used for every commit the bootstrapper creates.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Repository visibility on the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    /// Only a case-insensitive "public" selects `Public`.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("public") {
            Self::Public
        } else {
            Self::Private
        }
    }

    /// The `gh repo create` flag for this visibility.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Private => "--private",
            Self::Public => "--public",
        }
    }
}

/// A yes/no answer. Anything other than "yes" means no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Answer {
    Yes,
    #[default]
    No,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else {
            Self::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

/// Values collected from the prompts for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub github_username: String,
    pub repo_name: String,
    /// Empty when the user skipped the prompt.
    pub description: String,
    /// Visibility as typed, after default substitution.
    pub visibility_text: String,
    pub visibility: Visibility,
    pub main_branch: String,
    pub clone_existing: Answer,
    /// Only set on the clone path.
    pub existing_repo_url: Option<String>,
}

impl RepoConfig {
    /// Create a configuration with every optional field at its default.
    pub fn new(github_username: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            github_username: github_username.into(),
            repo_name: repo_name.into(),
            description: String::new(),
            visibility_text: DEFAULT_VISIBILITY.to_string(),
            visibility: Visibility::Private,
            main_branch: DEFAULT_BRANCH.to_string(),
            clone_existing: Answer::No,
            existing_repo_url: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the visibility from user text.
    pub fn visibility(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.visibility = Visibility::parse(&text);
        self.visibility_text = text;
        self
    }

    /// Set the branch to publish.
    pub fn main_branch(mut self, branch: impl Into<String>) -> Self {
        self.main_branch = branch.into();
        self
    }

    /// Clone from an existing repository instead of starting fresh.
    pub fn clone_existing(mut self, url: impl Into<String>) -> Self {
        self.clone_existing = Answer::Yes;
        self.existing_repo_url = Some(url.into());
        self
    }

    /// The description, if one was given.
    pub fn description_opt(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    /// Canonical HTTPS remote URL on the given host.
    pub fn remote_url(&self, host: &str) -> String {
        format!(
            "https://{}/{}/{}.git",
            host, self.github_username, self.repo_name
        )
    }

    /// Contents of the generated README.
    pub fn readme_contents(&self) -> String {
        format!("This is the {} repository.", self.repo_name)
    }
}

/// Settings that decide which tools run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Version-control executable.
    pub git_program: String,
    /// Hosting CLI executable.
    pub gh_program: String,
    /// Host used to build the remote URL.
    pub host: String,
    /// Directory in which the repository directory is created or cloned.
    pub parent_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git_program: "git".into(),
            gh_program: "gh".into(),
            host: DEFAULT_HOST.into(),
            parent_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Creates settings that reproduce the default tool layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the git executable.
    pub fn git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Sets the gh executable.
    pub fn gh_program(mut self, program: impl Into<String>) -> Self {
        self.gh_program = program.into();
        self
    }

    /// Sets the host for the remote URL.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        let mut host = host.into();
        if host.ends_with('/') {
            host.pop();
        }
        self.host = host;
        self
    }

    /// Sets the parent directory.
    pub fn parent_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parent_dir = dir.into();
        self
    }
}
