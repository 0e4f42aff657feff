//! The repository bootstrap sequence.
//!
//! A run is strictly sequential and fails fast: the first error ends it, and
//! nothing already created on disk or on GitHub is rolled back.

use crate::config::{INITIAL_COMMIT_MESSAGE, RepoConfig, Settings};
use crate::error::{BootstrapError, Field, Result};
use crate::git::{BranchOps, CommitOps, GitOps, RemoteOps};
use crate::github::{CreateRepo, GhCli, RepoOps};
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use std::fs;
use std::io::{self, BufRead, Write};

/// Name of the remote the repository is published to.
pub const ORIGIN: &str = "origin";

/// Name of the generated readme.
pub const README: &str = "README.md";

const GH_INSTALL_HINT: &str = "Install GitHub CLI from https://cli.github.com/. \
     You can also use winget: `winget install --id GitHub.cli`.\n";

/// Prerequisites shown before anything runs.
pub const BANNER: &[&str] = &[
    "Ensure you have the following before running this script:",
    "1. Git is installed and configured (username and email).",
    "2. GitHub CLI (gh) is installed and authenticated.",
    "   Run `gh auth login` to authenticate if not already logged in.\n",
];

/// Drives preflight, prompting, local setup and publishing.
#[derive(Debug, Clone)]
pub struct Bootstrapper<R> {
    runner: R,
    settings: Settings,
}

impl<R: CommandRunner + Clone> Bootstrapper<R> {
    pub fn new(runner: R, settings: Settings) -> Self {
        Self { runner, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Git handle for the parent directory.
    pub fn git(&self) -> GitOps<R> {
        GitOps::new(
            self.runner.clone(),
            &self.settings.git_program,
            &self.settings.parent_dir,
        )
    }

    /// GitHub CLI handle.
    pub fn gh(&self) -> GhCli<R> {
        GhCli::new(self.runner.clone(), &self.settings.gh_program)
    }

    /// Run the full sequence, reading answers through `prompter`.
    ///
    /// Returns the configuration that was published.
    pub fn run<I: BufRead, O: Write>(&self, prompter: &mut Prompter<I, O>) -> Result<RepoConfig> {
        for line in BANNER {
            prompter.say(line)?;
        }

        self.preflight()?;

        let config = prompter.collect_config()?;
        log::debug!("collected configuration: {:?}", config);

        let repo = self.prepare_local(&config, prompter)?;
        self.publish(&config, &repo, prompter)?;

        prompter.say(format!(
            "Repository {} created and pushed successfully.",
            config.repo_name
        ))?;
        Ok(config)
    }

    /// Verify that both git and gh can be run.
    pub fn preflight(&self) -> Result<()> {
        self.git().version().map_err(|e| {
            log::debug!("git version check failed: {}", e);
            BootstrapError::ToolNotFound {
                tool: "Git".into(),
                hint: None,
            }
        })?;

        self.gh().version().map_err(|e| {
            log::debug!("gh version check failed: {}", e);
            BootstrapError::ToolNotFound {
                tool: "GitHub CLI (gh)".into(),
                hint: Some(GH_INSTALL_HINT.into()),
            }
        })?;

        Ok(())
    }

    /// Produce the local repository, either cloned or freshly created.
    ///
    /// Returns a git handle bound to the repository directory.
    pub fn prepare_local<I: BufRead, O: Write>(
        &self,
        config: &RepoConfig,
        prompter: &mut Prompter<I, O>,
    ) -> Result<GitOps<R>> {
        if config.clone_existing.is_yes() {
            let url = config
                .existing_repo_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .ok_or(BootstrapError::EmptyField(Field::ExistingRepoUrl))?;
            self.clone_existing(config, url, prompter)
        } else {
            self.create_new(config, prompter)
        }
    }

    /// Clone `url` into the repository directory, optionally dropping its history.
    pub fn clone_existing<I: BufRead, O: Write>(
        &self,
        config: &RepoConfig,
        url: &str,
        prompter: &mut Prompter<I, O>,
    ) -> Result<GitOps<R>> {
        let parent = self.git();
        parent.clone_repo(url, &config.repo_name)?;
        let repo = parent.enter(&config.repo_name);

        if prompter.remove_history()?.is_yes() {
            repo.reset_history()?;
            prompter.say("Git history removed and new repository initialized.")?;
        }

        Ok(repo)
    }

    /// Create the repository directory, initialize it and commit a readme.
    ///
    /// Fails without touching anything if the directory already exists.
    pub fn create_new<I: BufRead, O: Write>(
        &self,
        config: &RepoConfig,
        prompter: &mut Prompter<I, O>,
    ) -> Result<GitOps<R>> {
        let name = &config.repo_name;
        prompter.say(format!("Initializing a new local repository for {}.", name))?;

        let dir = self.settings.parent_dir.join(name);
        fs::create_dir(&dir).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => BootstrapError::DirectoryExists(name.clone()),
            _ => BootstrapError::Io(e),
        })?;

        let repo = self.git().enter(name);
        repo.init()?;
        prompter.say(format!("New local Git repository initialized in {}.", name))?;

        fs::write(dir.join(README), config.readme_contents())?;
        repo.stage_all()?;
        repo.commit(INITIAL_COMMIT_MESSAGE)?;
        prompter.say(format!("Initial commit created with {}.", README))?;

        Ok(repo)
    }

    /// Create the GitHub repository, wire up `origin` and push.
    pub fn publish<I: BufRead, O: Write>(
        &self,
        config: &RepoConfig,
        repo: &GitOps<R>,
        prompter: &mut Prompter<I, O>,
    ) -> Result<()> {
        let request = CreateRepo::new(&config.repo_name)
            .visibility(config.visibility)
            .description(&config.description);
        self.gh().create_repo(&request, repo.workdir())?;
        prompter.say(format!(
            "Successfully created GitHub repository: {} ({})",
            config.repo_name, config.visibility_text
        ))?;

        let url = config.remote_url(&self.settings.host);
        if repo.remote_exists(ORIGIN)? {
            prompter.say(format!(
                "Remote '{}' already exists. Updating the remote URL.",
                ORIGIN
            ))?;
            repo.set_remote_url(ORIGIN, &url)?;
        } else {
            prompter.say(format!("Adding remote '{}'.", ORIGIN))?;
            repo.add_remote(ORIGIN, &url)?;
        }

        repo.rename_current_branch(&config.main_branch)?;
        repo.push_with_upstream(ORIGIN, &config.main_branch)?;
        Ok(())
    }
}
