//! Subcommand implementations.
//!
//! Each command loads its input, calls into the libraries and writes a
//! plain-text (or JSON) report to the given writer.

use std::io::Write;

use crate::{CliError, cli::Command};

pub mod dedup;
pub mod metrics;
pub mod rotations;

/// Runs `command`, writing its report to `out`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output cannot be
/// written.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Dedup { file } => dedup::run(file, out),
        Command::Rotations {
            file,
            mirrors,
            layout,
        } => rotations::run(file, *mirrors, *layout, out),
        Command::Metrics { file } => metrics::run(file, out),
    }
}
