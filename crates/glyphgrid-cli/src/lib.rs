//! Command-line front end for the glyphgrid libraries.
//!
//! The binary is a thin wrapper: argument definitions live in [`cli`], file
//! loading in [`input`], and every subcommand in [`commands`] writes to an
//! injected [`std::io::Write`] so it can be exercised without a terminal.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;

pub use self::error::CliError;
