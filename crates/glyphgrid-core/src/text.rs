//! Text notation for grids.
//!
//! A grid is written one row per line:
//!
//! - `.`, `_` and `0` are empty cells
//! - `#` is an occupied cell with value `1`
//! - `1`-`9` are occupied cells with that value
//!
//! Whitespace inside a line is ignored and blank lines are skipped, so grids
//! can be indented inside string literals. Every row must have the same
//! number of cells.
//!
//! Several grids can share one document when separated by lines holding
//! only `---`; see [`parse_grid_list`]. [`Grid::notation`] writes a grid
//! back out in the same notation.
//!
//! # Examples
//!
//! ```
//! use glyphgrid_core::Grid;
//!
//! let grid: Grid<u8> = "
//!     ### .
//!     .2 .
//! "
//! .parse()?;
//! assert_eq!(grid, Grid::from([[1, 1, 0], [0, 2, 0]]));
//! # Ok::<(), glyphgrid_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Grid;

/// Line separating grids in a multi-grid document.
pub const GRID_SEPARATOR: &str = "---";

/// An error returned when parsing a grid from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character outside the grid notation was found.
    #[display("invalid character {ch:?} at line {line}, column {column}")]
    InvalidChar {
        /// 1-based line number.
        line: usize,
        /// 1-based character column within the line.
        column: usize,
        /// The offending character.
        ch: char,
    },
    /// A row has a different number of cells than the first row.
    #[display("row at line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
}

impl ParseGridError {
    /// Returns the 1-based line the error was found on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidChar { line, .. } | Self::RaggedRow { line, .. } => *line,
        }
    }

    /// Returns the same error with its line number moved down by `offset`.
    #[must_use]
    pub fn with_line_offset(self, offset: usize) -> Self {
        match self {
            Self::InvalidChar { line, column, ch } => Self::InvalidChar {
                line: line + offset,
                column,
                ch,
            },
            Self::RaggedRow {
                line,
                expected,
                found,
            } => Self::RaggedRow {
                line: line + offset,
                expected,
                found,
            },
        }
    }
}

impl FromStr for Grid<u8> {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (line_index, line) in s.lines().enumerate() {
            let line_no = line_index + 1;
            let row = line
                .chars()
                .enumerate()
                .filter(|(_, ch)| !ch.is_whitespace())
                .map(|(column, ch)| {
                    parse_cell(ch).ok_or(ParseGridError::InvalidChar {
                        line: line_no,
                        column: column + 1,
                        ch,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if row.is_empty() {
                continue;
            }
            if let Some(first) = rows.first()
                && first.len() != row.len()
            {
                return Err(ParseGridError::RaggedRow {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        Ok(Self::from_rows(rows))
    }
}

/// Parses a document of grids separated by [`GRID_SEPARATOR`] lines.
///
/// Sections without any cells are skipped. Error line numbers refer to the
/// whole document.
///
/// # Errors
///
/// Returns the first [`ParseGridError`] found in any section.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Grid, text};
///
/// let grids = text::parse_grid_list("##\n---\n#\n#\n---\n")?;
/// assert_eq!(grids, [Grid::from([[1, 1]]), Grid::from([[1], [1]])]);
/// # Ok::<(), glyphgrid_core::ParseGridError>(())
/// ```
pub fn parse_grid_list(s: &str) -> Result<Vec<Grid<u8>>, ParseGridError> {
    let mut grids = Vec::new();
    let mut section = String::new();
    let mut section_start = 0;
    for (line_index, line) in s.lines().enumerate() {
        if line.trim() == GRID_SEPARATOR {
            push_section(&mut grids, &section, section_start)?;
            section.clear();
            section_start = line_index + 1;
        } else {
            section.push_str(line);
            section.push('\n');
        }
    }
    push_section(&mut grids, &section, section_start)?;
    Ok(grids)
}

fn push_section(
    grids: &mut Vec<Grid<u8>>,
    section: &str,
    offset: usize,
) -> Result<(), ParseGridError> {
    let grid: Grid<u8> = section
        .parse()
        .map_err(|err: ParseGridError| err.with_line_offset(offset))?;
    if !grid.is_empty() {
        grids.push(grid);
    }
    Ok(())
}

/// Text notation view of a grid, created by [`Grid::notation`].
#[derive(Debug, Clone, Copy)]
pub struct Notation<'a> {
    grid: &'a Grid<u8>,
}

impl Grid<u8> {
    /// Returns a [`Display`] view writing the grid in text notation.
    ///
    /// Empty cells are written as `.`, `1` as `#` and `2`-`9` as digits.
    /// Values above 9 have no single-character form and are written as `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphgrid_core::Grid;
    ///
    /// let grid = Grid::<u8>::from([[1, 0], [3, 1]]);
    /// assert_eq!(grid.notation().to_string(), "#.\n3#");
    /// ```
    #[must_use]
    pub fn notation(&self) -> Notation<'_> {
        Notation { grid: self }
    }
}

impl Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                let ch = match cell {
                    0 => '.',
                    2..=9 => char::from(b'0' + cell),
                    _ => '#',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

fn parse_cell(ch: char) -> Option<u8> {
    match ch {
        '.' | '_' | '0' => Some(0),
        '#' => Some(1),
        '1'..='9' => u8::try_from(ch).ok().map(|b| b - b'0'),
        _ => None,
    }
}
