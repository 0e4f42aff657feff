//! In-memory command runner for exercising the bootstrap sequence without
//! real `git` or `gh` executables.
//!
//! # Example
//!
//! ```rust
//! use repo_bootstrap::git::{GitOps, RemoteOps};
//! use repo_bootstrap::testing::RecordingRunner;
//!
//! let runner = RecordingRunner::new().remotes("origin\n");
//! let git = GitOps::new(&runner, "git", "/repo");
//! assert!(git.remote_exists("origin").unwrap());
//! assert_eq!(runner.command_lines(), vec!["git remote"]);
//! ```

use crate::error::{BootstrapError, Result};
use crate::git::METADATA_DIR;
use crate::runner::{CommandRunner, Invocation};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::io;

/// A [`CommandRunner`] that records every invocation instead of spawning it.
///
/// - `git remote` returns the output configured with [`RecordingRunner::remotes`].
/// - `clone <url> <name>` creates `<name>/.git` under the invocation directory.
/// - `init` creates `.git` in the invocation directory.
///
/// Directory side effects only happen when the invocation directory exists.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    remotes: String,
    failing: Vec<(String, String)>,
    missing: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output returned by `git remote`.
    pub fn remotes(mut self, output: impl Into<String>) -> Self {
        self.remotes = output.into();
        self
    }

    /// Make `<program> <subcommand> ...` exit with status 1.
    pub fn fail_on(mut self, program: impl Into<String>, subcommand: impl Into<String>) -> Self {
        self.failing.push((program.into(), subcommand.into()));
        self
    }

    /// Make every invocation of `program` fail to spawn.
    pub fn missing(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    /// Every invocation seen so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Every invocation rendered as a command line.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    /// Invocations of `program` with the given subcommand.
    pub fn count(&self, program: &str, subcommand: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program && c.subcommand() == Some(subcommand))
            .count()
    }

    fn record(&self, invocation: &Invocation) -> Result<()> {
        self.calls.borrow_mut().push(invocation.clone());

        if self.missing.contains(&invocation.program) {
            return Err(BootstrapError::Spawn {
                command: invocation.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            });
        }

        let fails = self.failing.iter().any(|(program, subcommand)| {
            *program == invocation.program && invocation.subcommand() == Some(subcommand.as_str())
        });
        if fails {
            return Err(BootstrapError::CommandFailed {
                command: invocation.to_string(),
                code: Some(1),
            });
        }

        self.simulate(invocation)
    }

    fn simulate(&self, invocation: &Invocation) -> Result<()> {
        let Some(ref dir) = invocation.cwd else {
            return Ok(());
        };
        if !dir.is_dir() {
            return Ok(());
        }

        match invocation.args.as_slice() {
            [cmd, _url, name] if cmd == "clone" => {
                fs::create_dir_all(dir.join(name).join(METADATA_DIR))?;
            }
            [cmd] if cmd == "init" => {
                fs::create_dir_all(dir.join(METADATA_DIR))?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.record(invocation)
    }

    fn capture(&self, invocation: &Invocation) -> Result<String> {
        self.record(invocation)?;
        if invocation.subcommand() == Some("remote") && invocation.args.len() == 1 {
            Ok(self.remotes.clone())
        } else {
            Ok(String::new())
        }
    }
}
