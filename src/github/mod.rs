//! GitHub integration through the `gh` command line.
//!
//! # Example
//!
//! ```rust,no_run
//! use repo_bootstrap::github::{CreateRepo, GhCli, RepoOps};
//! use repo_bootstrap::config::Visibility;
//! use repo_bootstrap::runner::SystemRunner;
//!
//! let gh = GhCli::new(SystemRunner::new(), "gh");
//! gh.create_repo(
//!     &CreateRepo::new("demo")
//!         .visibility(Visibility::Public)
//!         .description("A demo repository"),
//!     std::path::Path::new("demo"),
//! )?;
//! # Ok::<(), repo_bootstrap::error::BootstrapError>(())
//! ```

mod client;
mod repos;

pub use client::GhCli;
pub use repos::{CreateRepo, RepoOps};
