//! Core domain types for nbdeck.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! The notebook extractor produces them, the navigator consumes them.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod nav;
mod sanitize;
mod slide;
mod ui;

pub use nav::NavCommand;
pub use sanitize::sanitize_display_text;
pub use slide::{Chart, ChartError, Deck, EmptyDeckError, Slide, SlideHeading};
pub use ui::UiOptions;
