//! Error types for agenthooks.

use std::path::PathBuf;

use thiserror::Error;

/// Hook error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access commit message file {}: {source}", .path.display())]
    MessageFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", git_message(.command, .stderr, .exit_code))]
    Git {
        command: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("Config parse error in {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Agent error: {0}")]
    Agent(String),
}

impl Error {
    pub fn agent(msg: impl Into<String>) -> Self {
        Self::Agent(msg.into())
    }
}

fn git_message(command: &str, stderr: &str, exit_code: &Option<i32>) -> String {
    let mut msg = format!("`{command}` failed");
    if let Some(code) = exit_code {
        msg.push_str(&format!(" (exit {code})"));
    }
    if !stderr.is_empty() {
        msg.push_str(&format!(": {stderr}"));
    }
    msg
}
