//! Implementation of `cyclegate corner <file>`.
//!
//! Replays an edge list through a fresh store, then dumps a square
//! sub-block of the ancestor matrix — the debug view of what the closure
//! actually recorded. Replay is silent: rejected and malformed lines are
//! simply not committed, exactly as `check` would refuse them.
//!
//! Flags:
//! - `--size <n>` (default 6): block side length.
//! - `--row-start <r>` / `--col-start <c>` (default 0): block origin.
//!
//! Output (human mode): `size` lines of space-separated `1`/`0` digits.
//! Output (JSON mode): the block as a JSON object with its origin.
//!
//! Exit codes: 0 = success, 2 = unreadable input or a block outside the
//! matrix.
use std::io::Write as _;

use cyclegate_core::ReachabilityStore;

use crate::cmd::check::skip_line;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, RunSummary};
use crate::replay::admit_line;

/// Runs the `corner` command over already-read input.
///
/// # Errors
///
/// - [`CliError::CornerOutOfRange`] (exit code 2) if the requested block
///   extends past the node universe.
/// - [`CliError::IoError`] (exit code 2) if stdout/stderr cannot be
///   written.
pub fn run(
    content: &str,
    node_count: usize,
    size: usize,
    row_start: usize,
    col_start: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut store = ReachabilityStore::new(node_count);
    let mut summary = RunSummary::default();

    for line in content.lines() {
        if skip_line(line) {
            continue;
        }
        summary.record(admit_line(&mut store, line).verdict);
    }

    let view = store
        .corner(row_start, col_start, size)
        .map_err(|e| CliError::CornerOutOfRange {
            detail: e.to_string(),
        })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();

    if config.verbose && !config.quiet {
        writeln!(
            err,
            "universe: {node_count} nodes, replayed {} attempts ({} accepted)",
            summary.total(),
            summary.accepted
        )
        .map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;
    }

    let rendered = match mode {
        FormatMode::Human => render_grid(&view.rows),
        FormatMode::Json => {
            let mut s = serde_json::to_string_pretty(&view).map_err(|e| CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            })?;
            s.push('\n');
            s
        }
    };
    out.write_all(rendered.as_bytes())
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
}

/// Renders a block of booleans as lines of space-separated 1/0 digits.
fn render_grid(rows: &[Vec<bool>]) -> String {
    let mut grid = String::new();
    for row in rows {
        let digits: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
        grid.push_str(&digits.join(" "));
        grid.push('\n');
    }
    grid
}
