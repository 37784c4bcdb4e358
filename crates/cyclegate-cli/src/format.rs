/// Verdict rendering: human-readable and JSON (NDJSON) modes.
///
/// This module implements two output strategies for [`Attempt`] values:
///
/// - **Human mode** (default): exactly one verdict line per attempt to
///   stdout — `Good insert`, `Cycle found`, or `Bad (out of bounds) data` —
///   color-coded when enabled, with explanatory notes on stderr. Colors are
///   disabled when `--no-color` is set, the `NO_COLOR` environment variable
///   is present (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each attempt is serialized as a single-line JSON object
///   (NDJSON) to stdout; notes travel inside the record.
///
/// Both modes support a **quiet** flag (suppress notes and summary) and a
/// **verbose** flag (add run metadata to the summary).
use std::io::{IsTerminal as _, Write};

use serde::Serialize;

use crate::replay::{Attempt, Verdict};

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any non-empty value).
/// - stdout is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output mode selector derived from `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One verdict line per attempt.
    Human,
    /// One NDJSON record per attempt.
    Json,
}

/// Configuration for the verdict formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress notes and the summary line.
    pub quiet: bool,
    /// Add run metadata to the summary.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// `no_color_flag` is the `--no-color` boolean. Color detection also
    /// checks the `NO_COLOR` env var and the stdout TTY state.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-attempt output
// ---------------------------------------------------------------------------

/// The fixed verdict line for an attempt.
///
/// Self-loops are cycles of length one and share the cycle verdict.
pub fn verdict_line(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Accepted => "Good insert",
        Verdict::Cycle | Verdict::SelfLoop => "Cycle found",
        Verdict::BadData => "Bad (out of bounds) data",
    }
}

/// NDJSON record for one attempt.
#[derive(Debug, Serialize)]
struct AttemptRecord<'a> {
    line: usize,
    #[serde(flatten)]
    attempt: &'a Attempt,
}

/// Writes one attempt's verdict to `out` (stdout) and any note to `err`
/// (stderr), according to the mode and config.
///
/// `line` is the 1-based input line number, carried into JSON records so
/// that batch output can be correlated with the input file.
pub fn write_attempt<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    line: usize,
    attempt: &Attempt,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            if !config.quiet {
                if let Some(note) = &attempt.note {
                    writeln!(err, "{note}")?;
                }
            }
            let text = verdict_line(attempt.verdict);
            if config.colors {
                match attempt.verdict {
                    Verdict::Accepted => writeln!(out, "{text}"),
                    Verdict::Cycle | Verdict::SelfLoop => {
                        writeln!(out, "{ANSI_RED}{text}{ANSI_RESET}")
                    }
                    Verdict::BadData => writeln!(out, "{ANSI_YELLOW}{text}{ANSI_RESET}"),
                }
            } else {
                writeln!(out, "{text}")
            }
        }
        FormatMode::Json => {
            let record = AttemptRecord { line, attempt };
            let json = serde_json::to_string(&record).map_err(std::io::Error::other)?;
            writeln!(out, "{json}")
        }
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Per-verdict counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Attempts that committed an edge.
    pub accepted: usize,
    /// Attempts rejected for closing a cycle.
    pub cycles: usize,
    /// Attempts rejected as self-loops.
    pub self_loops: usize,
    /// Malformed or out-of-range attempts.
    pub bad_data: usize,
}

impl RunSummary {
    /// Folds one attempt into the counters.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Accepted => self.accepted += 1,
            Verdict::Cycle => self.cycles += 1,
            Verdict::SelfLoop => self.self_loops += 1,
            Verdict::BadData => self.bad_data += 1,
        }
    }

    /// Total attempts processed.
    pub fn total(&self) -> usize {
        self.accepted + self.cycles + self.self_loops + self.bad_data
    }

    /// Number of attempts that did not commit an edge.
    pub fn not_accepted(&self) -> usize {
        self.total() - self.accepted
    }
}

/// Writes the run summary to `err` (stderr).
///
/// Human mode prints a single counts line, plus the universe size when
/// verbose. JSON mode prints one NDJSON summary record. Quiet suppresses
/// the summary entirely.
pub fn write_summary<E: Write>(
    err: &mut E,
    summary: &RunSummary,
    node_count: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match mode {
        FormatMode::Human => {
            if config.verbose {
                writeln!(err, "universe: {node_count} nodes")?;
            }
            writeln!(
                err,
                "{} accepted, {} cycles, {} self-loops, {} bad",
                summary.accepted, summary.cycles, summary.self_loops, summary.bad_data
            )
        }
        FormatMode::Json => {
            let mut value = serde_json::to_value(summary).map_err(std::io::Error::other)?;
            if config.verbose {
                if let serde_json::Value::Object(map) = &mut value {
                    map.insert("node_count".to_owned(), node_count.into());
                }
            }
            writeln!(err, "{value}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
