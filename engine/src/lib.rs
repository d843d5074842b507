//! Core engine for nbdeck - slide navigation without TUI dependencies.
//!
//! The [`Navigator`] owns the deck and the current position. Rendering goes
//! through the [`SlideView`] trait, so the state machine can be driven by
//! the terminal UI or by a recording view in tests.

mod config;
mod navigator;
mod view;

pub use config::{AppConfig, ConfigError, ExtractConfig, NbdeckConfig, config_path};
pub use navigator::{Navigator, RenderError, Transition};
pub use view::{SlideView, TextField};

pub use nbdeck_notebook::{ExtractError, ExtractOptions, load_deck};
pub use nbdeck_types::{Chart, ChartError, Deck, NavCommand, Slide, SlideHeading, UiOptions};
