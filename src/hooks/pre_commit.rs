//! `pre-commit` hook: decide whether the staged change set may be committed.

use std::io::Write;

use tracing::{debug, info};

use crate::agent::{Agent, Verdict};
use crate::config::PreCommitConfig;
use crate::error::Error;
use crate::git::StagedChanges;
use crate::hooks::{banner, or_empty};

/// Run the pre-commit check. Returns `true` to allow the commit.
///
/// The closing status line is printed for both outcomes; errors propagate
/// without one.
pub fn run(
    git: &dyn StagedChanges,
    agent: &dyn Agent,
    settings: &PreCommitConfig,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    if !settings.enabled {
        debug!("pre-commit hook disabled");
        return Ok(true);
    }

    banner(out, "Pre-commit Quality Check")?;

    let files = or_empty("staged names", git.names());
    let passed = check(&files, agent, out)?;

    if passed {
        writeln!(out, "Pre-commit check completed successfully!")?;
    } else {
        writeln!(out, "Pre-commit check failed!")?;
    }
    Ok(passed)
}

/// Print the checklist and ask the agent for a verdict.
fn check(files: &[String], agent: &dyn Agent, out: &mut dyn Write) -> Result<bool, Error> {
    writeln!(out, "Running pre-commit quality check...")?;

    if files.is_empty() {
        writeln!(out, "No files to check")?;
        return Ok(true);
    }

    writeln!(out, "Files to check: {}", files.len())?;
    for file in files {
        writeln!(out, "   - {}", file)?;
    }

    match agent.review(files)? {
        Verdict::Pass => {
            writeln!(out, "Quality check passed!")?;
            Ok(true)
        }
        Verdict::Fail { reason } => {
            info!(%reason, "Quality check failed");
            writeln!(out, "Quality check failed: {}", reason)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{EnhanceRequest, StubAgent};
    use crate::git::{ChangeStatus, StagedFile};
    use crate::hooks::testing::{BrokenGit, FakeStaged};

    fn staged(paths: &[&str]) -> FakeStaged {
        FakeStaged {
            files: paths
                .iter()
                .map(|p| StagedFile::new(ChangeStatus::Added, *p))
                .collect(),
            diff: String::new(),
        }
    }

    struct Reviewer(Result<Verdict, String>);

    impl Agent for Reviewer {
        fn rewrite_message(&self, _request: &EnhanceRequest<'_>) -> Result<Option<String>, Error> {
            Ok(None)
        }

        fn review(&self, _files: &[String]) -> Result<Verdict, Error> {
            self.0.clone().map_err(Error::agent)
        }
    }

    fn run_check(git: &dyn StagedChanges, agent: &dyn Agent) -> (Result<bool, Error>, String) {
        let mut out = Vec::new();
        let result = run(git, agent, &PreCommitConfig::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_stage_passes() {
        let (result, printed) = run_check(&staged(&[]), &StubAgent);
        assert!(result.unwrap());
        assert!(printed.contains("No files to check"));
        assert!(printed.ends_with("Pre-commit check completed successfully!\n"));
    }

    #[test]
    fn test_lists_files_and_passes() {
        let (result, printed) = run_check(&staged(&["a.py", "b.py"]), &StubAgent);
        assert!(result.unwrap());

        let rule = "=".repeat(50);
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(
            lines,
            vec![
                rule.as_str(),
                "Pre-commit Quality Check",
                rule.as_str(),
                "Running pre-commit quality check...",
                "Files to check: 2",
                "   - a.py",
                "   - b.py",
                "Quality check passed!",
                "Pre-commit check completed successfully!",
            ]
        );
    }

    #[test]
    fn test_failed_git_query_passes() {
        let (result, printed) = run_check(&BrokenGit, &StubAgent);
        assert!(result.unwrap());
        assert!(printed.contains("No files to check"));
    }

    #[test]
    fn test_failing_verdict_blocks() {
        let agent = Reviewer(Ok(Verdict::Fail {
            reason: "debug print left in a.py".to_string(),
        }));
        let (result, printed) = run_check(&staged(&["a.py"]), &agent);
        assert!(!result.unwrap());
        assert!(printed.contains("Quality check failed: debug print left in a.py"));
        assert!(printed.ends_with("Pre-commit check failed!\n"));
    }

    #[test]
    fn test_review_error_propagates() {
        let agent = Reviewer(Err("timeout".to_string()));
        let (result, printed) = run_check(&staged(&["a.py"]), &agent);
        assert!(matches!(result, Err(Error::Agent(_))));
        assert!(!printed.contains("completed successfully"));
        assert!(!printed.contains("Pre-commit check failed!"));
    }

    #[test]
    fn test_review_skipped_for_empty_stage() {
        // An erroring agent is never consulted when nothing is staged
        let agent = Reviewer(Err("unreachable".to_string()));
        let (result, _) = run_check(&staged(&[]), &agent);
        assert!(result.unwrap());
    }

    #[test]
    fn test_disabled() {
        let mut out = Vec::new();
        let settings = PreCommitConfig { enabled: false };
        let agent = Reviewer(Ok(Verdict::Fail {
            reason: "never".to_string(),
        }));

        assert!(run(&staged(&["a.py"]), &agent, &settings, &mut out).unwrap());
        assert!(out.is_empty());
    }
}
