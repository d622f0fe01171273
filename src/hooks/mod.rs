//! Git hook entry points.

pub mod commit_msg;
pub mod pre_commit;

use std::io::{self, Write};

use tracing::warn;

use crate::error::Error;

/// Width of the `=` rule framing a hook's title.
const BANNER_WIDTH: usize = 50;

/// Print a hook title framed by `=` rules.
fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Substitute an empty result for a failed git query.
fn or_empty<T: Default>(query: &str, result: Result<T, Error>) -> T {
    result.unwrap_or_else(|e| {
        warn!(error = %e, query, "Git query failed, treating as empty");
        T::default()
    })
}
