//! CLI for the repository bootstrapper.

use anyhow::Result;
use clap::Parser;
use repo_bootstrap::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "init-repo")]
#[command(author, version, about = "Create a Git repository and publish it to GitHub", long_about = None)]
struct Cli {
    /// Git executable
    #[arg(long, default_value = "git", value_name = "PROGRAM")]
    git: String,

    /// GitHub CLI executable
    #[arg(long, default_value = "gh", value_name = "PROGRAM")]
    gh: String,

    /// Host used for the origin URL
    #[arg(long, default_value = "github.com")]
    host: String,

    /// Directory in which the repository is created or cloned
    #[arg(short = 'C', long, default_value = ".", value_name = "DIR")]
    directory: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings::new()
            .git_program(&self.git)
            .gh_program(&self.gh)
            .host(&self.host)
            .parent_dir(&self.directory)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();
    log::debug!("settings: {:?}", settings);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    Bootstrapper::new(SystemRunner::new(), settings).run(&mut prompter)?;
    Ok(())
}
