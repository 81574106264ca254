//! Input file loading.

use std::{fs, path::Path};

use glyphgrid_core::{Grid, text};
use glyphgrid_glyph::GlyphData;

use crate::CliError;

/// Reads a JSON array of glyphs.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the file cannot be read and
/// [`CliError::GlyphJson`] if it does not hold a glyph array.
pub fn read_glyphs(path: &Path) -> Result<Vec<GlyphData>, CliError> {
    let contents = read(path)?;
    let glyphs: Vec<GlyphData> =
        serde_json::from_str(&contents).map_err(|source| CliError::GlyphJson {
            path: path.to_owned(),
            source,
        })?;
    log::debug!("loaded {} glyph(s) from {}", glyphs.len(), path.display());
    Ok(glyphs)
}

/// Reads a text file of grids separated by `---` lines.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the file cannot be read and
/// [`CliError::Grid`] if any grid is malformed.
pub fn read_grids(path: &Path) -> Result<Vec<Grid<u8>>, CliError> {
    let contents = read(path)?;
    let grids = text::parse_grid_list(&contents).map_err(|source| CliError::Grid {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("loaded {} grid(s) from {}", grids.len(), path.display());
    Ok(grids)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
