//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits one verdict line per attempt to stdout and notes/summary to
/// stderr. `Json` emits one NDJSON record per attempt to stdout and a JSON
/// summary record to stderr.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `cyclegate` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Interactively admit edges: prompts for `start end` pairs on stdin
    /// and prints one verdict per attempt until EOF.
    Repl,

    /// Replay an edge list and print one verdict per attempt.
    ///
    /// The input holds one `start end` pair per line; blank lines and lines
    /// starting with `#` are skipped.
    Check {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Replay an edge list, then dump a square sub-block of the ancestor
    /// matrix as a 0/1 grid.
    Corner {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Block side length.
        #[arg(long, default_value = "6")]
        size: usize,
        /// First row of the block.
        #[arg(long, default_value = "0")]
        row_start: usize,
        /// First column of the block.
        #[arg(long, default_value = "0")]
        col_start: usize,
    },
}

/// Root CLI struct for the `cyclegate` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "cyclegate",
    version,
    about = "Cycle-rejecting edge admission for directed graphs",
    long_about = "Maintains a directed graph over a fixed node universe and rejects\n\
                  any edge that would close a cycle. Accepted edges update an exact\n\
                  transitive-closure matrix; rejected edges leave it untouched."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Size of the node universe: valid ids are 0..NODES.
    ///
    /// Can also be set via the `CYCLEGATE_NODES` environment variable.
    /// The matrix costs NODES² bits, so the default allocates 512 MiB.
    #[arg(long, global = true, env = "CYCLEGATE_NODES", default_value = "65536")]
    pub nodes: usize,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Add per-run detail to stderr: universe size, attempt counts
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CYCLEGATE_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence over the environment
    /// variable. Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "CYCLEGATE_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
