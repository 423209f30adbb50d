//! CLI entry point for wayfinder.
//!
//! Parses arguments with clap, installs logging in the requested format, runs
//! the selected algorithm over an edge-list file, renders the report to stdout
//! and maps failures to a non-zero exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use wayfinder_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

/// Execute the command, render the summary, and flush the output stream.
fn try_main(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.log_format) {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main(cli) {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::graph_error)
            .map(|graph| field::display(graph.code().as_str()));

        error!(error = %err, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
