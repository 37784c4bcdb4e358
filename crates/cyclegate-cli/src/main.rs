//! Entry point for the `cyclegate` binary.
//!
//! Parses the CLI, reads input where a subcommand needs it, dispatches to
//! the command module, and maps [`CliError`] values to stderr messages and
//! stable exit codes (0 = success, 1 = rejected attempts, 2 = input
//! failure).
mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod replay;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser as _;

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to its command module.
fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = match cli.format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);

    match &cli.command {
        Command::Repl => cmd::repl::run(cli.nodes, mode, &config),
        Command::Check { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::check::run(&content, cli.nodes, mode, &config)
        }
        Command::Corner {
            file,
            size,
            row_start,
            col_start,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::corner::run(
                &content,
                cli.nodes,
                *size,
                *row_start,
                *col_start,
                mode,
                &config,
            )
        }
    }
}
