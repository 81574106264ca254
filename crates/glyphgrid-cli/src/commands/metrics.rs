//! `metrics` command.

use std::{io::Write, path::Path};

use glyphgrid_core::{Grid, metrics};

use crate::{CliError, input};

/// Prints block count, area and fill of every grid in `file`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the output cannot be
/// written.
pub fn run<W: Write>(file: &Path, out: &mut W) -> Result<(), CliError> {
    let grids = input::read_grids(file)?;
    write_metrics(&grids, out)
}

/// Writes one report line per grid.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_metrics<W: Write>(grids: &[Grid<u8>], out: &mut W) -> Result<(), CliError> {
    for (i, grid) in grids.iter().enumerate() {
        let blocks = metrics::blocks_in_grid(grid);
        let area = metrics::area_in_grid(grid);
        writeln!(
            out,
            "grid {}: {}x{}, blocks {blocks}, area {area}, fill {}",
            i + 1,
            grid.width(),
            grid.height(),
            FillPercent { blocks, area },
        )?;
    }
    Ok(())
}

/// Block-to-area ratio as a percentage rounded to one decimal place.
struct FillPercent {
    blocks: usize,
    area: usize,
}

impl std::fmt::Display for FillPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.area == 0 {
            return f.write_str("n/a");
        }
        let tenths = (self.blocks * 2000 / self.area).div_ceil(2);
        write!(f, "{}.{}%", tenths / 10, tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grids: &[Grid<u8>]) -> String {
        let mut out = Vec::new();
        write_metrics(grids, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metrics_report() {
        let grids = [Grid::from([[0, 1], [2, 0]]), Grid::from([[1, 1, 0]])];
        assert_eq!(
            render(&grids),
            "grid 1: 2x2, blocks 2, area 4, fill 50.0%\n\
             grid 2: 3x1, blocks 2, area 3, fill 66.7%\n"
        );
    }

    #[test]
    fn test_fill_rounding() {
        let fill = |blocks, area| FillPercent { blocks, area }.to_string();
        assert_eq!(fill(1, 3), "33.3%");
        assert_eq!(fill(2, 3), "66.7%");
        assert_eq!(fill(5, 5), "100.0%");
        assert_eq!(fill(0, 4), "0.0%");
        assert_eq!(fill(0, 0), "n/a");
    }
}
