//! # Repo Bootstrap
//!
//! Interactively create a Git repository and publish it to GitHub.
//!
//! A run checks that `git` and `gh` are available, asks for the repository
//! settings, then either clones an existing repository or creates a new one
//! with a generated `README.md`. It then creates the GitHub repository, points
//! `origin` at it and pushes the main branch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repo_bootstrap::prelude::*;
//! use std::io;
//!
//! let stdin = io::stdin();
//! let mut prompter = Prompter::new(stdin.lock(), io::stdout());
//!
//! let config = Bootstrapper::new(SystemRunner::new(), Settings::default())
//!     .run(&mut prompter)?;
//! println!("published {}", config.repo_name);
//! # Ok::<(), repo_bootstrap::error::BootstrapError>(())
//! ```
//!
//! ## Testing without git or gh
//!
//! Every external command goes through [`runner::CommandRunner`], so the
//! sequence can be driven by [`testing::RecordingRunner`]:
//!
//! ```rust
//! use repo_bootstrap::prelude::*;
//! use repo_bootstrap::testing::RecordingRunner;
//!
//! let runner = RecordingRunner::new().missing("gh");
//! let err = Bootstrapper::new(&runner, Settings::default())
//!     .preflight()
//!     .unwrap_err();
//! assert!(matches!(err, BootstrapError::ToolNotFound { .. }));
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod prompt;
pub mod runner;
pub mod testing;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BANNER, Bootstrapper, ORIGIN, README};
    pub use crate::config::{Answer, RepoConfig, Settings, Visibility};
    pub use crate::error::{BootstrapError, Field, Result};
    pub use crate::git::{BranchOps, CommitOps, GitOps, RemoteOps};
    pub use crate::github::{CreateRepo, GhCli, RepoOps};
    pub use crate::prompt::Prompter;
    pub use crate::runner::{CommandRunner, Invocation, SystemRunner};
}

pub use prelude::*;
