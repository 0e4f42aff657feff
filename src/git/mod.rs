//! Git operations driven through the `git` command line.
//!
//! Each [`GitOps`] handle is bound to a working directory, and every command it
//! issues runs there. Entering a freshly created or cloned repository means
//! deriving a new handle with [`GitOps::enter`]; the process working directory
//! is never changed.

mod branch;
mod commit;
mod remote;

pub use branch::BranchOps;
pub use commit::CommitOps;
pub use remote::RemoteOps;

use crate::config::INITIAL_COMMIT_MESSAGE;
use crate::error::Result;
use crate::runner::{CommandRunner, Invocation};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the version-control metadata directory.
pub const METADATA_DIR: &str = ".git";

/// Git command wrapper bound to a working directory.
///
/// # Example
///
/// ```rust,no_run
/// use repo_bootstrap::git::{BranchOps, CommitOps, GitOps, RemoteOps};
/// use repo_bootstrap::runner::SystemRunner;
///
/// let git = GitOps::new(SystemRunner::new(), "git", ".").enter("demo");
/// git.init()?;
/// git.stage_all()?;
/// git.commit("Initial commit")?;
/// git.rename_current_branch("main")?;
/// git.push_with_upstream("origin", "main")?;
/// # Ok::<(), repo_bootstrap::error::BootstrapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitOps<R> {
    runner: R,
    program: String,
    workdir: PathBuf,
}

impl<R: CommandRunner> GitOps<R> {
    /// Create a handle that runs `program` inside `workdir`.
    pub fn new(runner: R, program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// The directory commands run in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The git executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// A handle for a directory relative to this one.
    pub fn enter(&self, dir: impl AsRef<Path>) -> Self
    where
        R: Clone,
    {
        Self {
            runner: self.runner.clone(),
            program: self.program.clone(),
            workdir: self.workdir.join(dir),
        }
    }

    /// Check that git can be run at all (`git --version`).
    pub fn version(&self) -> Result<()> {
        self.runner.run(&Invocation::new(&self.program).arg("--version"))
    }

    /// Clone `url` into `name` under the working directory.
    ///
    /// Returns the path of the new checkout.
    pub fn clone_repo(&self, url: &str, name: &str) -> Result<PathBuf> {
        self.run(["clone", url, name])?;
        Ok(self.workdir.join(name))
    }

    /// Drop the existing history and start over with a single commit.
    pub fn reset_history(&self) -> Result<()> {
        let metadata = self.workdir.join(METADATA_DIR);
        log::debug!("removing {}", metadata.display());
        fs::remove_dir_all(&metadata)?;

        self.init()?;
        self.stage_all()?;
        self.commit(INITIAL_COMMIT_MESSAGE)
    }

    pub(crate) fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
    }

    pub(crate) fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner.run(&self.invocation(args))
    }

    pub(crate) fn capture<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner.capture(&self.invocation(args))
    }
}
