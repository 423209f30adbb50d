//! Command-line interface orchestration for wayfinder.
//!
//! Every command loads one edge-list file, runs a single algorithm over it
//! and returns an [`ExecutionSummary`] that [`render_summary`] prints.

mod commands;

pub use commands::{
    BfsArgs, Cli, CliError, Command, ComponentGroup, DijkstraArgs, DistanceEntry,
    ExecutionSummary, InputArgs, Report, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
