//! `rotations` command.

use std::{io::Write, path::Path};

use glyphgrid_core::{Grid, Orientation, text::GRID_SEPARATOR};
use glyphgrid_glyph::{any_rotations, orientation_groups};

use crate::{CliError, cli::Layout, input};

/// Expands the shapes in `file` and prints the variants in `layout`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the output cannot be
/// written.
pub fn run<W: Write>(
    file: &Path,
    include_mirrors: bool,
    layout: Layout,
    out: &mut W,
) -> Result<(), CliError> {
    let shapes = input::read_grids(file)?;
    match layout {
        Layout::Flat => write_flat(&any_rotations(&shapes, include_mirrors), out),
        Layout::Grouped => write_grouped(&orientation_groups(&shapes, include_mirrors), out),
    }
}

/// Writes variants in grid notation, separated by `---` lines.
///
/// The output can be read back as a grid file.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_flat<W: Write>(variants: &[Grid<u8>], out: &mut W) -> Result<(), CliError> {
    for (i, variant) in variants.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{GRID_SEPARATOR}")?;
        }
        writeln!(out, "{}", variant.notation())?;
    }
    Ok(())
}

/// Writes each orientation group under a `[orientation]` header, shapes
/// separated by blank lines.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_grouped<W: Write>(
    groups: &[(Orientation, Vec<Grid<u8>>)],
    out: &mut W,
) -> Result<(), CliError> {
    for (orientation, shapes) in groups {
        writeln!(out, "[{orientation}]")?;
        for shape in shapes {
            writeln!(out, "{}", shape.notation())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
