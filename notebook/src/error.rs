use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort extraction. None of these are recoverable:
/// a notebook either yields a complete deck or nothing.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read notebook {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("notebook is not valid nbformat JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unsupported nbformat version {major} (expected 4)")]
    UnsupportedVersion { major: u32 },
    #[error("cell {cell}: heading line {line:?} has no '.' between title and question")]
    MalformedHeading { cell: usize, line: String },
    #[error("notebook contains no code cells after the first cell")]
    NoSlides,
}
