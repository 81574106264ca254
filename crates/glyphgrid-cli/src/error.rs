//! Command errors.

use std::{io, path::PathBuf};

use glyphgrid_core::ParseGridError;

/// An error raised while running a command.
///
/// The message names the failing step; the underlying error is available
/// through [`std::error::Error::source`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CliError {
    /// An input file could not be read.
    #[display("failed to read {}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A glyph file is not valid glyph JSON.
    #[display("invalid glyph JSON in {}", path.display())]
    GlyphJson {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A grid file is not valid grid text.
    #[display("invalid grid in {}", path.display())]
    Grid {
        /// File being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: ParseGridError,
    },
    /// Output could not be written.
    #[display("failed to write output")]
    Write {
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Output could not be serialized.
    #[display("failed to serialize output")]
    Serialize {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::Write { source }
    }
}
