//! Implementation of `cyclegate repl`.
//!
//! The interactive admission loop: prompts for `start end` pairs on stdin
//! and prints one verdict per attempt to stdout until EOF. The prompt and
//! all notes go to stderr so that stdout carries nothing but verdicts and
//! stays pipeable.
//!
//! Verdict lines (human mode): `Good insert`, `Cycle found`,
//! `Bad (out of bounds) data`. Malformed input is reported as bad data
//! without consulting the store. Whitespace-only lines are skipped.
//!
//! The loop itself never fails: every attempt produces a verdict and the
//! session ends at EOF with exit code 0 and a summary on stderr.
use std::io::{BufRead as _, Write as _};

use cyclegate_core::ReachabilityStore;

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, RunSummary, write_attempt, write_summary};
use crate::replay::admit_line;

/// The prompt printed before each read.
const PROMPT: &str = "Enter start end:  ";

/// Runs the `repl` command.
///
/// Creates a fresh store over `node_count` nodes and processes stdin lines
/// until EOF.
///
/// # Errors
///
/// [`CliError::StdinReadError`] if stdin cannot be read, or
/// [`CliError::IoError`] if stdout/stderr cannot be written. Rejected
/// attempts are verdicts, not errors; the REPL always exits 0 otherwise.
pub fn run(node_count: usize, mode: FormatMode, config: &FormatterConfig) -> Result<(), CliError> {
    let mut store = ReachabilityStore::new(node_count);
    let mut summary = RunSummary::default();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();

    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        if mode == FormatMode::Human && !config.quiet {
            write!(err, "{PROMPT}").map_err(stderr_error)?;
            err.flush().map_err(stderr_error)?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if read == 0 {
            break; // EOF
        }
        line_no += 1;

        if line.trim().is_empty() {
            continue;
        }

        let attempt = admit_line(&mut store, &line);
        summary.record(attempt.verdict);
        write_attempt(&mut out, &mut err, line_no, &attempt, mode, config)
            .map_err(stdout_error)?;
    }

    if mode == FormatMode::Human && !config.quiet {
        // Terminate the prompt line left dangling by EOF.
        writeln!(err).map_err(stderr_error)?;
    }
    write_summary(&mut err, &summary, node_count, mode, config).map_err(stderr_error)?;

    Ok(())
}

fn stdout_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

fn stderr_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}
