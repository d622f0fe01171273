//! `commit-msg` hook: enhance the drafted commit message.
//!
//! A placeholder draft (empty, or starting with a comment) is replaced by a
//! header plus one comment line per staged file:
//!
//! ```text
//! feat: Update application code
//!
//! # Auto-generated commit message
//! # Files changed:
//! # - M	src/main.rs
//! ```
//!
//! Any other draft is kept and gets the configured suffix appended.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::agent::{Agent, EnhanceRequest};
use crate::config::CommitMsgConfig;
use crate::error::Error;
use crate::git::{StagedChanges, StagedFile};
use crate::hooks::{banner, or_empty};

/// Characters of the draft echoed before enhancing.
const PREVIEW_CHARS: usize = 50;

/// Whether the draft carries no author content.
pub fn is_placeholder(message: &str, comment_char: char) -> bool {
    let message = message.trim_start();
    message.is_empty() || message.starts_with(comment_char)
}

/// Build a replacement message listing every staged file.
pub fn synthesize(files: &[StagedFile], settings: &CommitMsgConfig) -> String {
    let c = settings.comment_char;
    let mut message = format!(
        "{}\n\n{c} Auto-generated commit message\n{c} Files changed:\n",
        settings.header
    );

    for file in files {
        let paths = match &file.from {
            Some(from) => format!("{}\t{}", from, file.path),
            None => file.path.clone(),
        };
        message.push_str(&format!("{c} - {}\t{}\n", file.status, paths));
    }

    message
}

/// First [`PREVIEW_CHARS`] characters of the draft, with `...` when cut.
fn preview(draft: &str) -> String {
    let draft = draft.trim();
    if draft.chars().count() > PREVIEW_CHARS {
        let head: String = draft.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        draft.to_string()
    }
}

/// Append the annotation suffix. Not idempotent.
pub fn annotate(message: &str, settings: &CommitMsgConfig) -> String {
    format!("{}{}", message, settings.suffix)
}

/// Produce the final message for a draft.
pub fn enhance(
    draft: &str,
    files: &[StagedFile],
    diff: &str,
    agent: &dyn Agent,
    settings: &CommitMsgConfig,
) -> Result<String, Error> {
    let request = EnhanceRequest { draft, files, diff };
    if let Some(rewritten) = agent.rewrite_message(&request)? {
        debug!("Agent rewrote commit message");
        return Ok(rewritten);
    }

    if is_placeholder(draft, settings.comment_char) {
        Ok(synthesize(files, settings))
    } else {
        Ok(annotate(draft, settings))
    }
}

/// Run the commit-msg hook against the message file at `path`.
pub fn run(
    path: &Path,
    git: &dyn StagedChanges,
    agent: &dyn Agent,
    settings: &CommitMsgConfig,
    out: &mut dyn Write,
) -> Result<(), Error> {
    if !settings.enabled {
        debug!("commit-msg hook disabled");
        return Ok(());
    }

    let draft = fs::read_to_string(path).map_err(|source| Error::MessageFile {
        path: path.to_path_buf(),
        source,
    })?;

    banner(out, "AI Commit Message Enhancement")?;

    let diff = or_empty("staged diff", git.diff());
    let files = or_empty("staged name-status", git.name_status());
    debug!(files = files.len(), diff_bytes = diff.len(), "Collected staged changes");

    writeln!(out, "Original message: {}", preview(&draft))?;
    writeln!(out, "Generating enhanced commit message...")?;
    let message = enhance(&draft, &files, &diff, agent, settings)?;

    fs::write(path, &message).map_err(|source| Error::MessageFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = message.len(), "Wrote commit message");
    writeln!(out, "Commit message enhanced successfully!")?;

    Ok(())
}
