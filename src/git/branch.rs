//! Git branch operations.

use crate::error::Result;
use crate::git::GitOps;
use crate::runner::CommandRunner;

/// Branch operations for GitOps.
pub trait BranchOps {
    /// Force-rename the current branch (`git branch -M <name>`).
    fn rename_current_branch(&self, name: &str) -> Result<()>;
}

impl<R: CommandRunner> BranchOps for GitOps<R> {
    fn rename_current_branch(&self, name: &str) -> Result<()> {
        self.run(["branch", "-M", name])
    }
}
