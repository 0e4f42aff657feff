//! Git remote configuration and push operations.

use crate::error::Result;
use crate::git::GitOps;
use crate::runner::CommandRunner;

/// Remote operations for GitOps.
pub trait RemoteOps {
    /// List configured remote names (`git remote`).
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Check if a remote with exactly this name exists.
    fn remote_exists(&self, name: &str) -> Result<bool>;

    /// Add a new remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    /// Point an existing remote at a new URL.
    fn set_remote_url(&self, name: &str, url: &str) -> Result<()>;

    /// Push a branch and set it as upstream (`git push -u <remote> <branch>`).
    fn push_with_upstream(&self, remote: &str, branch: &str) -> Result<()>;
}

impl<R: CommandRunner> RemoteOps for GitOps<R> {
    fn list_remotes(&self) -> Result<Vec<String>> {
        let output = self.capture(["remote"])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn remote_exists(&self, name: &str) -> Result<bool> {
        Ok(self.list_remotes()?.iter().any(|r| r == name))
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.run(["remote", "add", name, url])
    }

    fn set_remote_url(&self, name: &str, url: &str) -> Result<()> {
        self.run(["remote", "set-url", name, url])
    }

    fn push_with_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(["push", "-u", remote, branch])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_list_remotes_parses_lines() {
        let runner = RecordingRunner::new().remotes("origin\nupstream\n");
        let git = GitOps::new(&runner, "git", "/repo");
        assert_eq!(git.list_remotes().unwrap(), vec!["origin", "upstream"]);
    }

    #[test]
    fn test_remote_exists_is_exact_match() {
        let runner = RecordingRunner::new().remotes("origin-old\n");
        let git = GitOps::new(&runner, "git", "/repo");
        assert!(!git.remote_exists("origin").unwrap());

        let runner = RecordingRunner::new().remotes("upstream\norigin\n");
        let git = GitOps::new(&runner, "git", "/repo");
        assert!(git.remote_exists("origin").unwrap());
    }

    #[test]
    fn test_no_remotes() {
        let runner = RecordingRunner::new();
        let git = GitOps::new(&runner, "git", "/repo");
        assert!(git.list_remotes().unwrap().is_empty());
    }

    #[test]
    fn test_push_with_upstream() {
        let runner = RecordingRunner::new();
        let git = GitOps::new(&runner, "git", "/repo");
        git.push_with_upstream("origin", "main").unwrap();
        assert_eq!(runner.command_lines(), vec!["git push -u origin main"]);
    }
}
