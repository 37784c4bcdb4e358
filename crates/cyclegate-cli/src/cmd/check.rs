//! Implementation of `cyclegate check <file>`.
//!
//! Batch mode: replays an edge list through a fresh store and emits one
//! verdict per attempt. The input holds one `start end` pair per line;
//! blank lines and lines starting with `#` are skipped without producing a
//! verdict.
//!
//! Output (human mode): one verdict line per attempt to stdout, notes and a
//! final counts summary to stderr.
//! Output (JSON mode): one NDJSON record per attempt to stdout, a JSON
//! summary record to stderr.
//!
//! Exit codes: 0 = every attempt accepted, 1 = at least one attempt was
//! rejected or malformed, 2 = input could not be read.
use cyclegate_core::ReachabilityStore;

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, RunSummary, write_attempt, write_summary};
use crate::replay::admit_line;

/// Runs the `check` command over already-read input.
///
/// # Errors
///
/// - [`CliError::EdgesRejected`] (exit code 1) if any attempt was not
///   accepted; all verdicts have been printed by then.
/// - [`CliError::IoError`] (exit code 2) if stdout/stderr cannot be
///   written.
pub fn run(
    content: &str,
    node_count: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut store = ReachabilityStore::new(node_count);
    let mut summary = RunSummary::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();

    for (index, line) in content.lines().enumerate() {
        if skip_line(line) {
            continue;
        }
        let attempt = admit_line(&mut store, line);
        summary.record(attempt.verdict);
        write_attempt(&mut out, &mut err, index + 1, &attempt, mode, config).map_err(|e| {
            CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            }
        })?;
    }

    write_summary(&mut err, &summary, node_count, mode, config).map_err(|e| CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    })?;

    if summary.not_accepted() > 0 {
        return Err(CliError::EdgesRejected {
            rejected: summary.not_accepted(),
        });
    }
    Ok(())
}

/// Returns `true` for lines that carry no attempt: blank or `#` comments.
pub fn skip_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}
