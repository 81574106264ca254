//! `glyphgrid` command-line tool.

use std::{error::Error as _, io, process::ExitCode};

use clap::Parser as _;
use glyphgrid_cli::{cli::Args, commands};
use log::LevelFilter;

fn main() -> ExitCode {
    better_panic::install();

    let args = Args::parse();
    init_logger(args.verbose);

    let stdout = io::stdout();
    match commands::run(&args.command, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
