//! Hook configuration.
//!
//! Settings are read from `<project>/.agenthooks.toml`, falling back to
//! `~/.agenthooks/config.toml`, then to built-in defaults. Config files are
//! never written by the hooks.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".agenthooks.toml";

/// Hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub commit_msg: CommitMsgConfig,

    #[serde(default)]
    pub pre_commit: PreCommitConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Commit-message enhancer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitMsgConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Marker that starts a comment line in commit messages.
    #[serde(default = "default_comment_char")]
    pub comment_char: char,

    /// First line of a synthesized message.
    #[serde(default = "default_header")]
    pub header: String,

    /// Appended verbatim to messages the author already wrote.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

/// Pre-commit checker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreCommitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level for the `agenthooks` target when `AGENTHOOKS_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_comment_char() -> char {
    '#'
}

fn default_header() -> String {
    "feat: Update application code".to_string()
}

fn default_suffix() -> String {
    "\n\n# Enhanced by AI agent".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CommitMsgConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            comment_char: default_comment_char(),
            header: default_header(),
            suffix: default_suffix(),
        }
    }
}

impl Default for PreCommitConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Path to the project config file.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Path to the user config file (~/.agenthooks/config.toml).
    pub fn user_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".agenthooks").join("config.toml"))
    }

    /// Load config for a project, falling back to user config and defaults.
    pub fn load(project_root: &Path) -> Result<Self, Error> {
        let project = Self::project_path(project_root);
        if project.exists() {
            return Self::load_file(&project);
        }

        if let Some(user) = Self::user_path() {
            if user.exists() {
                return Self::load_file(&user);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
