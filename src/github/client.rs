//! GitHub CLI handle.

use crate::error::Result;
use crate::runner::{CommandRunner, Invocation};
use std::path::Path;

/// Wrapper around the `gh` executable.
#[derive(Debug, Clone)]
pub struct GhCli<R> {
    pub(crate) runner: R,
    pub(crate) program: String,
}

impl<R: CommandRunner> GhCli<R> {
    /// Create a handle that runs `program`.
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// The gh executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that gh can be run at all (`gh --version`).
    pub fn version(&self) -> Result<()> {
        self.runner.run(&Invocation::new(&self.program).arg("--version"))
    }

    pub(crate) fn run_in(&self, dir: &Path, args: Vec<String>) -> Result<()> {
        let invocation = Invocation::new(&self.program).args(args).current_dir(dir);
        self.runner.run(&invocation)
    }
}
