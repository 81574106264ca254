//! `dedup` command.

use std::{io::Write, path::Path};

use glyphgrid_glyph::{GlyphData, dedup_glyphs};

use crate::{CliError, input};

/// Deduplicates the glyphs in `file` and writes the survivors as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the output cannot be
/// written.
pub fn run<W: Write>(file: &Path, out: &mut W) -> Result<(), CliError> {
    let glyphs = input::read_glyphs(file)?;
    let total = glyphs.len();
    let unique = dedup_glyphs(glyphs);
    log::info!(
        "removed {} duplicate glyph(s), {} remain",
        total - unique.len(),
        unique.len()
    );
    write_glyphs(&unique, out)
}

/// Writes `glyphs` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_glyphs<W: Write>(glyphs: &[GlyphData], out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, glyphs)
        .map_err(|source| CliError::Serialize { source })?;
    writeln!(out)?;
    Ok(())
}
