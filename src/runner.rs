//! External command execution.
//!
//! Every `git` and `gh` call goes through a [`CommandRunner`], so the whole
//! bootstrap sequence can run against a recording fake in tests.

use crate::error::{BootstrapError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the command runs in. `None` inherits the process directory.
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in the given directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The first argument, which is the subcommand for git and gh.
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Executes external commands.
pub trait CommandRunner {
    /// Run a command with inherited stdio, failing on a non-zero exit.
    fn run(&self, invocation: &Invocation) -> Result<()>;

    /// Run a command and return its captured stdout, failing on a non-zero exit.
    fn capture(&self, invocation: &Invocation) -> Result<String>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }

    fn capture(&self, invocation: &Invocation) -> Result<String> {
        (**self).capture(invocation)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(ref dir) = invocation.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        log::debug!("running `{}` in {:?}", invocation, invocation.cwd);

        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(invocation, e))?;

        if !status.success() {
            return Err(BootstrapError::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String> {
        log::debug!("capturing `{}` in {:?}", invocation, invocation.cwd);

        let output = Self::command(invocation)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| spawn_error(invocation, e))?;

        if !output.status.success() {
            return Err(BootstrapError::CommandFailed {
                command: invocation.to_string(),
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn spawn_error(invocation: &Invocation, source: std::io::Error) -> BootstrapError {
    BootstrapError::Spawn {
        command: invocation.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_whitespace() {
        let inv = Invocation::new("git").args(["commit", "-m", "Initial commit"]);
        assert_eq!(inv.to_string(), "git commit -m \"Initial commit\"");
        assert_eq!(inv.subcommand(), Some("commit"));
    }

    #[test]
    fn test_current_dir() {
        let inv = Invocation::new("git").arg("init").current_dir("/tmp/demo");
        assert_eq!(inv.cwd, Some(PathBuf::from("/tmp/demo")));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let inv = Invocation::new("definitely-not-a-real-program-4f1c").arg("--version");
        let err = SystemRunner::new().run(&inv).unwrap_err();
        assert!(matches!(err, BootstrapError::Spawn { .. }));
    }
}
