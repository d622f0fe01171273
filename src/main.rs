//! agenthooks - git hooks backed by an AI agent.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agenthooks::agent::StubAgent;
use agenthooks::git::Git;
use agenthooks::{hooks, Config, Error};

#[derive(Parser)]
#[command(name = "agenthooks")]
#[command(about = "Git hooks that enhance commit messages and check staged changes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance the drafted commit message (commit-msg hook)
    CommitMsg {
        /// Path to the commit message file
        file: PathBuf,
    },

    /// Check staged files before committing (pre-commit hook)
    PreCommit,
}

impl Commands {
    /// What the hook was doing, for error reports.
    fn activity(&self) -> &'static str {
        match self {
            Commands::CommitMsg { .. } => "commit message enhancement",
            Commands::PreCommit => "pre-commit check",
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit 1 like every other hook failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let activity = cli.command.activity();
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error during {}: {}", activity, e);
            ExitCode::FAILURE
        }
    }
}

/// Run a hook. Returns `false` when the commit should be blocked.
fn run(command: Commands) -> Result<bool, Error> {
    let workdir = std::env::current_dir()?;
    let config = Config::load(&workdir)?;
    init_logging(&config.log.level);

    let git = Git::new(workdir);
    let agent = StubAgent;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::CommitMsg { file } => {
            hooks::commit_msg::run(&file, &git, &agent, &config.commit_msg, &mut stdout)?;
            Ok(true)
        }
        Commands::PreCommit => hooks::pre_commit::run(&git, &agent, &config.pre_commit, &mut stdout),
    }
}

/// Log to stderr; stdout is reserved for hook status text.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("AGENTHOOKS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("agenthooks={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
