//! Staged-change queries against the `git` CLI.
//!
//! Every query shells out to `git diff --cached` in the hook's working
//! directory. The inherited environment is passed through untouched, so
//! `GIT_DIR` and `GIT_INDEX_FILE` set by git for the hook are honored.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Kind of change recorded for a staged path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Unmerged,
    Unknown(String),
}

impl ChangeStatus {
    /// Parse a `--name-status` code. Rename and copy codes carry a
    /// similarity score (`R100`, `C075`) which is dropped.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('A') => Self::Added,
            Some('M') => Self::Modified,
            Some('D') => Self::Deleted,
            Some('R') => Self::Renamed,
            Some('C') => Self::Copied,
            Some('T') => Self::TypeChanged,
            Some('U') => Self::Unmerged,
            _ => Self::Unknown(code.to_string()),
        }
    }

    /// Whether `--name-status` reports a source and a destination path.
    fn has_source(&self) -> bool {
        matches!(self, Self::Renamed | Self::Copied)
    }
}

/// Renders the single-letter `--name-status` code.
impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "A"),
            Self::Modified => write!(f, "M"),
            Self::Deleted => write!(f, "D"),
            Self::Renamed => write!(f, "R"),
            Self::Copied => write!(f, "C"),
            Self::TypeChanged => write!(f, "T"),
            Self::Unmerged => write!(f, "U"),
            Self::Unknown(code) => write!(f, "{code}"),
        }
    }
}

/// A staged path with its change status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub status: ChangeStatus,
    pub path: String,
    /// Original path for renames and copies.
    pub from: Option<String>,
}

impl StagedFile {
    pub fn new(status: ChangeStatus, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
            from: None,
        }
    }
}

/// Read-only view of the staged change set.
pub trait StagedChanges {
    /// Staged files with their status, in git's order.
    fn name_status(&self) -> Result<Vec<StagedFile>, Error>;

    /// Staged file names, in git's order.
    fn names(&self) -> Result<Vec<String>, Error>;

    /// Unified diff of the staged changes.
    fn diff(&self) -> Result<String, Error>;
}

/// `git` CLI bound to a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run a git command and return raw stdout.
    fn run(&self, args: &[&str]) -> Result<String, Error> {
        debug!(args = ?args, "Running git");
        let out = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        if out.status.success() {
            Ok(String::from_utf8_lossy(&out.stdout).into_owned())
        } else {
            Err(Error::Git {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_owned(),
                exit_code: out.status.code(),
            })
        }
    }
}

impl StagedChanges for Git {
    fn name_status(&self) -> Result<Vec<StagedFile>, Error> {
        let out = self.run(&["diff", "--cached", "--name-status", "-z"])?;
        Ok(parse_name_status_z(&out))
    }

    fn names(&self) -> Result<Vec<String>, Error> {
        let out = self.run(&["diff", "--cached", "--name-only", "-z"])?;
        Ok(out
            .split('\0')
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn diff(&self) -> Result<String, Error> {
        self.run(&["diff", "--cached", "--no-color", "--no-ext-diff"])
    }
}

/// Parse `git diff --name-status -z` output.
///
/// Records are NUL-separated: `<code>\0<path>\0`, or
/// `<code>\0<from>\0<to>\0` for renames and copies. A truncated trailing
/// record is dropped.
fn parse_name_status_z(output: &str) -> Vec<StagedFile> {
    let mut fields = output.split('\0').filter(|f| !f.is_empty());
    let mut files = Vec::new();

    while let Some(code) = fields.next() {
        let status = ChangeStatus::from_code(code);
        let Some(first) = fields.next() else {
            debug!(code, "Truncated name-status record");
            break;
        };

        if status.has_source() {
            let Some(to) = fields.next() else {
                debug!(code, from = first, "Rename record missing destination");
                break;
            };
            files.push(StagedFile {
                status,
                path: to.to_owned(),
                from: Some(first.to_owned()),
            });
        } else {
            files.push(StagedFile::new(status, first));
        }
    }

    files
}
