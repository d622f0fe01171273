//! Agent seam for the hook decisions.
//!
//! Both hooks delegate their judgement (rewriting a message, reviewing a
//! change set) to an [`Agent`]. Only [`StubAgent`] ships: it never rewrites
//! and always passes.

use tracing::debug;

use crate::error::Error;
use crate::git::StagedFile;

/// Input for a commit message rewrite.
#[derive(Debug, Clone, Copy)]
pub struct EnhanceRequest<'a> {
    pub draft: &'a str,
    pub files: &'a [StagedFile],
    pub diff: &'a str,
}

/// Outcome of a pre-commit review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail { reason: String },
}

/// Decision maker behind both hooks.
pub trait Agent {
    /// Propose a full replacement message, or `None` to keep the built-in
    /// behavior.
    fn rewrite_message(&self, request: &EnhanceRequest<'_>) -> Result<Option<String>, Error>;

    /// Review the staged files before the commit is created.
    fn review(&self, files: &[String]) -> Result<Verdict, Error>;
}

/// Agent used when nothing is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubAgent;

impl Agent for StubAgent {
    fn rewrite_message(&self, request: &EnhanceRequest<'_>) -> Result<Option<String>, Error> {
        debug!(
            files = request.files.len(),
            diff_bytes = request.diff.len(),
            "No agent configured, keeping built-in message handling"
        );
        Ok(None)
    }

    fn review(&self, files: &[String]) -> Result<Verdict, Error> {
        debug!(files = files.len(), "No agent configured, passing review");
        Ok(Verdict::Pass)
    }
}
