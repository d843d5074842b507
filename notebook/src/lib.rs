//! Notebook extraction for nbdeck.
//!
//! Reads an nbformat 4 document and turns its code cells into slides:
//!
//! ```text
//! cell 0      preamble, always skipped
//! cell 1..n   code cells -> Slide { heading, code, chart }
//!             other cells -> ignored
//! ```
//!
//! A code cell's heading comes from its first line, `#<n>. <question>`.
//! Its chart is the last `display_data` output carrying an `image/png`.

mod error;
mod extract;
mod format;

pub use error::ExtractError;
pub use extract::{ExtractOptions, extract_slides, load_deck};
pub use format::{Cell, CellType, Notebook, Output};
