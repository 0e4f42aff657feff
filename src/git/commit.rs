//! Git init, staging and commit operations.

use crate::error::Result;
use crate::git::GitOps;
use crate::runner::CommandRunner;

/// Commit operations for GitOps.
pub trait CommitOps {
    /// Initialize a repository in the working directory (`git init`).
    fn init(&self) -> Result<()>;

    /// Stage everything under the working directory (`git add .`).
    fn stage_all(&self) -> Result<()>;

    /// Create a commit with the staged changes.
    fn commit(&self, message: &str) -> Result<()>;
}

impl<R: CommandRunner> CommitOps for GitOps<R> {
    fn init(&self) -> Result<()> {
        self.run(["init"])
    }

    fn stage_all(&self) -> Result<()> {
        self.run(["add", "."])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(["commit", "-m", message])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_commit_passes_message_as_one_argument() {
        let runner = RecordingRunner::new();
        let git = GitOps::new(&runner, "git", "/repo");
        git.commit("Initial commit").unwrap();

        let calls = runner.invocations();
        assert_eq!(calls[0].args, vec!["commit", "-m", "Initial commit"]);
    }

    #[test]
    fn test_failed_stage_propagates() {
        let runner = RecordingRunner::new().fail_on("git", "add");
        let git = GitOps::new(&runner, "git", "/repo");
        assert!(git.init().is_ok());
        assert!(git.stage_all().is_err());
    }
}
