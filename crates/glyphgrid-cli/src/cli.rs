//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Grid geometry tools for glyph puzzles.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Remove glyphs whose alternatives repeat an earlier glyph's.
    ///
    /// Reads a JSON array of `{"name": ..., "glyphs": [...]}` objects and
    /// writes the remaining glyphs as JSON.
    Dedup {
        /// JSON glyph file.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the rotations of the shapes in a grid file.
    Rotations {
        /// Grid file, shapes separated by `---` lines.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also produce the mirror image of every rotation.
        #[arg(short, long)]
        mirrors: bool,

        /// How to lay out the variants.
        #[arg(long, value_name = "LAYOUT", default_value = "flat")]
        layout: Layout,
    },

    /// Print block count and area of every grid in a grid file.
    Metrics {
        /// Grid file, grids separated by `---` lines.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output layout of the `rotations` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Distinct variants of all shapes, one after another.
    Flat,
    /// One group per orientation holding every shape, repeats kept.
    Grouped,
}
